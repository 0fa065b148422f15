use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use crate::models::{Item, ScoringScheme};
use crate::core::scoring::calculate_match_score;

static IMAGE_SEED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"random=(\d+)").ok());

const BOTH_IMAGES_BONUS: u8 = 15;
const CLOSE_SEED_BONUS: u8 = 10;
const NEAR_SEED_BONUS: u8 = 5;
const ONE_IMAGE_BONUS: u8 = 5;
const DETAILED_DESCRIPTION_BONUS: u8 = 5;
const DETAILED_DESCRIPTION_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Image-aware match score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedScore {
    pub score: u8,
    #[serde(rename = "baseScore")]
    pub base_score: u8,
    #[serde(rename = "imageBonus")]
    pub image_bonus: u8,
    pub confidence: Confidence,
    #[serde(rename = "hasImages")]
    pub has_images: bool,
    #[serde(rename = "visualVerification")]
    pub visual_verification: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    HighlyRecommended,
    Recommended,
    Possible,
    Unlikely,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: RecommendedAction,
    pub message: String,
    pub urgency: Urgency,
}

/// Display-ready breakdown of an enhanced score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub score: String,
    pub confidence: Confidence,
    pub details: Vec<String>,
    pub recommendation: Recommendation,
}

/// Scores pairs with the points scheme and adds image bonuses
///
/// Placeholder image services encode a seed as `random=<N>` in the URL.
/// When `seed_hints` is on, nearby seeds on both sides earn an extra bonus;
/// the hint means nothing for real uploaded photos.
#[derive(Debug, Clone, Copy)]
pub struct EnhancedScorer {
    seed_hints: bool,
}

impl EnhancedScorer {
    pub fn new(seed_hints: bool) -> Self {
        Self { seed_hints }
    }

    pub fn score(&self, lost: &Item, found: &Item) -> EnhancedScore {
        let base_score = calculate_match_score(
            lost,
            found,
            ScoringScheme::Points,
            &ScoringScheme::Points.default_weights(),
        );

        let lost_image = lost.image_url();
        let found_image = found.image_url();
        let has_images = lost_image.is_some() && found_image.is_some();
        let visual_verification = lost_image.is_some() || found_image.is_some();

        let mut image_bonus = 0u8;
        let mut confidence = Confidence::Medium;

        if let (Some(lost_url), Some(found_url)) = (lost_image, found_image) {
            image_bonus += BOTH_IMAGES_BONUS;
            confidence = Confidence::High;

            if self.seed_hints {
                if let (Some(a), Some(b)) = (extract_image_seed(lost_url), extract_image_seed(found_url)) {
                    let diff = a.abs_diff(b);
                    if diff < 50 {
                        image_bonus += CLOSE_SEED_BONUS;
                    } else if diff < 200 {
                        image_bonus += NEAR_SEED_BONUS;
                    }
                }
            }
        } else if visual_verification {
            image_bonus += ONE_IMAGE_BONUS;
        }

        if visual_verification && (is_detailed(lost) || is_detailed(found)) {
            image_bonus += DETAILED_DESCRIPTION_BONUS;
        }

        EnhancedScore {
            score: base_score.saturating_add(image_bonus).min(100),
            base_score,
            image_bonus,
            confidence,
            has_images,
            visual_verification,
        }
    }
}

impl Default for EnhancedScorer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Seed of a placeholder image URL (`...?random=123`)
///
/// `random=0` yields `Some(0)` and takes part in the seed bonus like any
/// other seed; the web client treated a zero seed as absent.
pub fn extract_image_seed(image_url: &str) -> Option<u64> {
    IMAGE_SEED
        .as_ref()?
        .captures(image_url)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

#[inline]
fn is_detailed(item: &Item) -> bool {
    item.description()
        .map(|d| d.chars().count() > DETAILED_DESCRIPTION_CHARS)
        .unwrap_or(false)
}

pub fn recommend(score: u8, has_images: bool) -> Recommendation {
    let (action, message, urgency) = if score >= 85 && has_images {
        (
            RecommendedAction::HighlyRecommended,
            "Excellent match with photo verification available",
            Urgency::High,
        )
    } else if score >= 70 {
        (
            RecommendedAction::Recommended,
            "Good match - recommend contacting owner",
            Urgency::Medium,
        )
    } else if score >= 60 {
        (
            RecommendedAction::Possible,
            "Possible match - verify details carefully",
            Urgency::Low,
        )
    } else {
        (RecommendedAction::Unlikely, "Low probability match", Urgency::None)
    };

    Recommendation {
        action,
        message: message.to_string(),
        urgency,
    }
}

pub fn explain(result: &EnhancedScore) -> MatchExplanation {
    let mut details = vec![format!("Base compatibility: {}%", result.base_score)];

    if result.image_bonus > 0 {
        details.push(format!("Image enhancement: +{}%", result.image_bonus));
    }

    if result.has_images {
        details.push("Both items have photos for comparison".to_string());
    } else if result.visual_verification {
        details.push("One item has photo for verification".to_string());
    }

    details.push(format!("Confidence level: {}", result.confidence.as_str()));

    MatchExplanation {
        score: format!("{}%", result.score),
        confidence: result.confidence,
        details,
        recommendation: recommend(result.score, result.has_images),
    }
}
