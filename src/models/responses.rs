use serde::{Deserialize, Serialize};
use crate::core::enhanced::{EnhancedScore, MatchExplanation};
use crate::core::matcher::EnhancedMatch;
use crate::models::domain::{MatchStrength, ScoredItem, ScoringScheme};

/// Response for the pair scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    #[serde(rename = "matchStrength")]
    pub match_strength: MatchStrength,
    pub scheme: ScoringScheme,
}

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredItem>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the enhanced pair scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedScoreResponse {
    #[serde(rename = "match")]
    pub score: EnhancedScore,
    pub explanation: MatchExplanation,
}

/// Response for the enhanced search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedMatchesResponse {
    pub matches: Vec<EnhancedMatch>,
    pub total: usize,
    #[serde(rename = "searchQuery")]
    pub search_query: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
