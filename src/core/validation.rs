use crate::models::Vehicle;
use std::collections::HashSet;
use thiserror::Error;
use validator::Validate;

/// Reasons a batch of vehicles is rejected before matching
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Vehicle list cannot be empty")]
    EmptyBatch,

    #[error("Too many vehicles: {size} submitted, at most {max} allowed")]
    BatchTooLarge { size: usize, max: usize },

    #[error("Invalid vehicle data for vehicle: {id}")]
    InvalidVehicle { id: String },

    #[error("Duplicate vehicle id: {id}")]
    DuplicateVehicleId { id: String },
}

/// Check a single vehicle
///
/// Valid iff the id is non-empty after trimming and length, width and height
/// are all present and strictly positive.
#[inline]
pub fn validate_vehicle(vehicle: &Vehicle) -> bool {
    !vehicle.id.trim().is_empty() && vehicle.validate().is_ok()
}

/// Field-level messages for an invalid vehicle, for error responses
pub fn describe_vehicle_errors(vehicle: &Vehicle) -> Vec<String> {
    let mut messages = Vec::new();

    if vehicle.id.trim().is_empty() {
        messages.push("Vehicle ID cannot be empty".to_string());
    }

    if let Err(errors) = vehicle.validate() {
        for (field, _) in errors.field_errors() {
            let field: &str = field.as_ref();
            if field == "id" {
                continue;
            }
            messages.push(format!("{} must be present and positive", capitalize(field)));
        }
    }

    messages.sort();
    messages
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fail-fast precondition gate for a whole batch
///
/// Any single failure rejects the batch; nothing is matched partially.
pub fn validate_batch(vehicles: &[Vehicle], max_batch_size: usize) -> Result<(), ValidationError> {
    if vehicles.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    if vehicles.len() > max_batch_size {
        return Err(ValidationError::BatchTooLarge {
            size: vehicles.len(),
            max: max_batch_size,
        });
    }

    if let Some(invalid) = vehicles.iter().find(|v| !validate_vehicle(v)) {
        return Err(ValidationError::InvalidVehicle {
            id: invalid.id.clone(),
        });
    }

    let mut seen = HashSet::with_capacity(vehicles.len());
    for vehicle in vehicles {
        if !seen.insert(vehicle.id.as_str()) {
            return Err(ValidationError::DuplicateVehicleId {
                id: vehicle.id.clone(),
            });
        }
    }

    Ok(())
}
