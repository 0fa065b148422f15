use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Item, ScoringScheme};

/// Request to score a single lost/found pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(alias = "lost_item", rename = "lostItem")]
    pub lost_item: Item,
    #[serde(alias = "found_item", rename = "foundItem")]
    pub found_item: Item,
    #[serde(default)]
    pub scheme: Option<ScoringScheme>,
}

/// Request to rank candidates against a source item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub item: Item,
    #[serde(default)]
    pub candidates: Vec<Item>,
    #[validate(range(max = 100))]
    #[serde(default, alias = "min_score", rename = "minScore")]
    pub min_score: Option<u8>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub scheme: Option<ScoringScheme>,
}

/// Request to score a pair with the image-aware scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedScoreRequest {
    #[serde(alias = "lost_item", rename = "lostItem")]
    pub lost_item: Item,
    #[serde(alias = "found_item", rename = "foundItem")]
    pub found_item: Item,
}

/// Request to search the backend for found items matching a lost item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnhancedMatchesRequest {
    #[serde(alias = "lost_item", rename = "lostItem")]
    pub lost_item: Item,
    #[validate(range(max = 100))]
    #[serde(default, alias = "min_score", rename = "minScore")]
    pub min_score: Option<u8>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default, alias = "max_results", rename = "maxResults")]
    pub max_results: Option<usize>,
}
