//! Vehicle Storage Matcher - assigns vehicles to storage spaces
//!
//! This library provides the matching algorithm behind the storage service.
//! Vehicles are placed largest-first into the tightest, cheapest fitting space,
//! with each space used at most once per batch.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, can_fit, validate_vehicle, validate_batch, ValidationError};
pub use crate::models::{Vehicle, StorageSpace, MatchResult, ScoringWeights, ResultOrder};
pub use crate::services::{SpaceCatalog, StaticCatalog};
