use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier as issued by the backend; numeric and string ids never compare equal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    #[serde(alias = "lost")]
    Lost,
    #[serde(alias = "found")]
    Found,
}

/// Lost or found item report
///
/// Every descriptive field is optional: a field missing on either side of a
/// comparison simply drops out of the score. Fields the backend sends that
/// the matcher does not know about are kept in `extra` and echoed back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<RecordId>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "reportedBy", default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn category(&self) -> Option<&str> {
        present(&self.category)
    }

    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    pub fn color(&self) -> Option<&str> {
        present(&self.color)
    }

    pub fn size(&self) -> Option<&str> {
        present(&self.size)
    }

    pub fn image_url(&self) -> Option<&str> {
        present(&self.image_url)
    }

    /// True when both items carry an id and the ids are equal
    pub fn same_id(&self, other: &Item) -> bool {
        matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b)
    }
}

/// Blank strings count as missing
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Coarse label for a 0-100 match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchStrength {
    #[serde(rename = "Poor Match")]
    Poor,
    #[serde(rename = "Possible Match")]
    Possible,
    #[serde(rename = "Fair Match")]
    Fair,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Excellent Match")]
    Excellent,
}

impl MatchStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => MatchStrength::Excellent,
            65..=79 => MatchStrength::Good,
            45..=64 => MatchStrength::Fair,
            30..=44 => MatchStrength::Possible,
            _ => MatchStrength::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStrength::Excellent => "Excellent Match",
            MatchStrength::Good => "Good Match",
            MatchStrength::Fair => "Fair Match",
            MatchStrength::Possible => "Possible Match",
            MatchStrength::Poor => "Poor Match",
        }
    }
}

/// Candidate item annotated with its score against the source item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
    #[serde(rename = "matchStrength")]
    pub match_strength: MatchStrength,
}

/// Which weight table and comparators the composite score uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringScheme {
    /// Percentage weights; location compared by building token
    #[default]
    Weighted,
    /// Point weights; location compared as a whole string
    Points,
}

impl ScoringScheme {
    pub fn default_weights(&self) -> ScoringWeights {
        match self {
            ScoringScheme::Weighted => ScoringWeights {
                title: 40.0,
                category: 25.0,
                location: 20.0,
                description: 10.0,
                color: 5.0,
                size: 0.0,
            },
            ScoringScheme::Points => ScoringWeights {
                title: 2.0,
                category: 3.0,
                location: 0.5,
                description: 0.0,
                color: 1.0,
                size: 1.0,
            },
        }
    }

    /// Results must score strictly above this to be returned
    pub fn default_min_score(&self) -> u8 {
        match self {
            ScoringScheme::Weighted => 15,
            ScoringScheme::Points => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringScheme::Weighted => "weighted",
            ScoringScheme::Points => "points",
        }
    }
}

/// Per-factor weights; a zero weight disables the factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub title: f64,
    pub category: f64,
    pub location: f64,
    pub description: f64,
    pub color: f64,
    pub size: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringScheme::default().default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_backend_shape() {
        let item: Item = serde_json::from_str(
            r#"{
                "id": 42,
                "type": "FOUND",
                "title": "Blue Nike Backpack",
                "category": "Bags & Backpacks",
                "location": "Student Center",
                "reportedBy": "u-7",
                "image_url": "https://picsum.photos/200?random=12",
                "status": "open"
            }"#,
        )
        .unwrap();

        assert_eq!(item.id, Some(RecordId::Number(42)));
        assert_eq!(item.kind, Some(ItemKind::Found));
        assert_eq!(item.reported_by, Some(RecordId::Text("u-7".to_string())));
        assert_eq!(item.extra.get("status"), Some(&Value::from("open")));
        assert!(item.color.is_none());
    }

    #[test]
    fn test_lowercase_kind_accepted() {
        let item: Item = serde_json::from_str(r#"{"id": "a", "type": "lost"}"#).unwrap();
        assert_eq!(item.kind, Some(ItemKind::Lost));
    }

    #[test]
    fn test_blank_fields_are_missing() {
        let item = Item {
            title: Some("   ".to_string()),
            color: Some("red".to_string()),
            ..Default::default()
        };

        assert_eq!(item.title(), None);
        assert_eq!(item.color(), Some("red"));
    }

    #[test]
    fn test_numeric_and_text_ids_differ() {
        let a = Item { id: Some(RecordId::Number(5)), ..Default::default() };
        let b = Item { id: Some(RecordId::Text("5".to_string())), ..Default::default() };
        let c = Item { id: Some(RecordId::Number(5)), ..Default::default() };

        assert!(!a.same_id(&b));
        assert!(a.same_id(&c));
        assert!(!Item::default().same_id(&Item::default()));
    }

    #[test]
    fn test_match_strength_bands() {
        assert_eq!(MatchStrength::from_score(100), MatchStrength::Excellent);
        assert_eq!(MatchStrength::from_score(80), MatchStrength::Excellent);
        assert_eq!(MatchStrength::from_score(79), MatchStrength::Good);
        assert_eq!(MatchStrength::from_score(45), MatchStrength::Fair);
        assert_eq!(MatchStrength::from_score(30), MatchStrength::Possible);
        assert_eq!(MatchStrength::from_score(29), MatchStrength::Poor);
        assert_eq!(MatchStrength::Good.label(), "Good Match");
    }

    #[test]
    fn test_scheme_defaults() {
        let weighted = ScoringScheme::Weighted.default_weights();
        assert_eq!(weighted.title, 40.0);
        assert_eq!(weighted.size, 0.0);
        assert_eq!(ScoringScheme::Weighted.default_min_score(), 15);

        let points = ScoringScheme::Points.default_weights();
        assert_eq!(points.category, 3.0);
        assert_eq!(points.location, 0.5);
        assert_eq!(ScoringScheme::Points.default_min_score(), 30);
    }
}
