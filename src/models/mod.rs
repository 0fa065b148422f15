// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Item, ItemKind, RecordId, ScoredItem, MatchStrength, ScoringScheme, ScoringWeights};
pub use requests::{ScoreRequest, FindMatchesRequest, EnhancedScoreRequest, EnhancedMatchesRequest};
pub use responses::{ScoreResponse, FindMatchesResponse, EnhancedScoreResponse, EnhancedMatchesResponse, HealthResponse, ErrorResponse};
