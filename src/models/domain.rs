use serde::{Deserialize, Serialize};
use validator::Validate;

/// Axis-aligned extents of a vehicle or a storage space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self { length, width, height }
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// True when every axis of `self` is no larger than the matching axis of `outer`.
    /// Axes are never swapped.
    #[inline]
    pub fn fits_within(&self, outer: &Dimensions) -> bool {
        outer.length >= self.length && outer.width >= self.width && outer.height >= self.height
    }
}

/// Vehicle submitted for storage
///
/// Dimensions are optional on the wire so a missing value is reported as a
/// validation failure instead of a JSON error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Vehicle {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[validate(required, range(exclusive_min = 0.0))]
    #[serde(default)]
    pub length: Option<f64>,
    #[validate(required, range(exclusive_min = 0.0))]
    #[serde(default)]
    pub width: Option<f64>,
    #[validate(required, range(exclusive_min = 0.0))]
    #[serde(default)]
    pub height: Option<f64>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, length: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            vehicle_type: None,
            length: Some(length),
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn with_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    /// All three dimensions, or None if any is missing
    pub fn dimensions(&self) -> Option<Dimensions> {
        Some(Dimensions::new(self.length?, self.width?, self.height?))
    }

    /// Volume of the vehicle, 0 when a dimension is missing
    pub fn volume(&self) -> f64 {
        self.dimensions().map_or(0.0, |d| d.volume())
    }
}

/// Storage space from the listing catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSpace {
    pub id: String,
    #[serde(rename = "type", default)]
    pub space_type: String,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(rename = "pricePerMonth", default)]
    pub price_per_month: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl StorageSpace {
    pub fn new(
        id: impl Into<String>,
        space_type: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        price_per_month: f64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            space_type: space_type.into(),
            length: Some(length),
            width: Some(width),
            height: Some(height),
            price_per_month,
            location: location.into(),
            features: None,
        }
    }

    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = Some(features);
        self
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        Some(Dimensions::new(self.length?, self.width?, self.height?))
    }

    /// Volume of the space, 0 when a dimension is missing
    pub fn volume(&self) -> f64 {
        self.dimensions().map_or(0.0, |d| d.volume())
    }

    /// A listing that can ever hold a vehicle: all dimensions present and positive
    pub fn is_usable(&self) -> bool {
        self.dimensions()
            .is_some_and(|d| d.length > 0.0 && d.width > 0.0 && d.height > 0.0)
    }

    pub fn has_valid_price(&self) -> bool {
        self.price_per_month >= 0.0
    }
}

pub const MATCH_FOUND: &str = "Match found";
pub const NO_SUITABLE_SPACE: &str = "No suitable storage space found";

/// Outcome of matching a single vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
    #[serde(rename = "matchedSpace")]
    pub matched_space: Option<StorageSpace>,
    /// Display score in [0, 100], higher is better
    #[serde(rename = "fitScore")]
    pub fit_score: f64,
    pub message: String,
}

impl MatchResult {
    pub fn matched(vehicle_id: impl Into<String>, space: StorageSpace, fit_score: f64) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            matched_space: Some(space),
            fit_score,
            message: MATCH_FOUND.to_string(),
        }
    }

    pub fn unmatched(vehicle_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            matched_space: None,
            fit_score: 0.0,
            message: NO_SUITABLE_SPACE.to_string(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched_space.is_some()
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub waste: f64,
    pub cost: f64,
    pub dimension: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            waste: 40.0,
            cost: 30.0,
            dimension: 30.0,
        }
    }
}

/// Order in which a batch's results are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrder {
    /// Processing order: largest vehicle first
    #[default]
    VolumeSorted,
    /// Same order as the submitted vehicles
    Input,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_volume() {
        let vehicle = Vehicle::new("v1", 15.0, 6.0, 5.0);
        assert_eq!(vehicle.volume(), 450.0);
    }

    #[test]
    fn test_missing_dimension_has_zero_volume() {
        let mut vehicle = Vehicle::new("v1", 15.0, 6.0, 5.0);
        vehicle.width = None;
        assert!(vehicle.dimensions().is_none());
        assert_eq!(vehicle.volume(), 0.0);
    }

    #[test]
    fn test_space_deserializes_catalog_fields() {
        let json = r#"{
            "id": "space-1",
            "type": "garage",
            "length": 20.0,
            "width": 10.0,
            "height": 8.0,
            "pricePerMonth": 150.0,
            "location": "Downtown",
            "features": ["covered", "24/7 access"]
        }"#;

        let space: StorageSpace = serde_json::from_str(json).unwrap();
        assert_eq!(space.space_type, "garage");
        assert_eq!(space.volume(), 1600.0);
        assert_eq!(space.features.as_deref().map(|f| f.len()), Some(2));
        assert!(space.is_usable());
        assert!(space.has_valid_price());
    }

    #[test]
    fn test_match_result_wire_format() {
        let result = MatchResult::unmatched("v1");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["vehicleId"], "v1");
        assert!(value["matchedSpace"].is_null());
        assert_eq!(value["fitScore"], 0.0);
        assert_eq!(value["message"], NO_SUITABLE_SPACE);
    }

    #[test]
    fn test_result_order_names() {
        let order: ResultOrder = serde_json::from_str("\"input\"").unwrap();
        assert_eq!(order, ResultOrder::Input);
        assert_eq!(ResultOrder::default(), ResultOrder::VolumeSorted);
    }
}
