// Core algorithm exports
pub mod fit;
pub mod matcher;
pub mod scoring;
pub mod validation;

pub use fit::can_fit;
pub use matcher::Matcher;
pub use scoring::{calculate_fit_score, normalize_score, FitScore};
pub use validation::{validate_vehicle, validate_batch, describe_vehicle_errors, ValidationError};
