// Core algorithm exports
pub mod enhanced;
pub mod location;
pub mod matcher;
pub mod scoring;
pub mod text;

pub use enhanced::{EnhancedScore, EnhancedScorer, MatchExplanation, explain, extract_image_seed};
pub use location::{location_similarity, full_location_similarity, building_token};
pub use matcher::{Matcher, MatchResult, EnhancedMatch, EnhancedOptions};
pub use scoring::{calculate_match_score, match_reasons};
pub use text::text_similarity;
