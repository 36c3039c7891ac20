// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Dimensions, Vehicle, StorageSpace, MatchResult, ScoringWeights, ResultOrder, MATCH_FOUND, NO_SUITABLE_SPACE};
pub use requests::MatchRequest;
pub use responses::{HealthResponse, ErrorResponse};
