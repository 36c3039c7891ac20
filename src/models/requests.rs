use crate::models::domain::Vehicle;

/// Body of `POST /api/storage/match`: a bare JSON array of vehicles
pub type MatchRequest = Vec<Vehicle>;
