//! Lost & found matching - ranks found-item reports against lost-item reports
//!
//! The heuristic scores pairs of item records with weighted text, category,
//! location, color and size comparisons. It is advisory ranking only; the
//! platform backend stays authoritative.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, EnhancedScorer, calculate_match_score, text_similarity, location_similarity};
pub use models::{Item, ScoredItem, ScoringScheme, ScoringWeights, FindMatchesRequest, FindMatchesResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(location_similarity("Library 2F", "Lib Annex"), 0.5);
        assert_eq!(Matcher::default().scheme(), ScoringScheme::Weighted);
    }
}
