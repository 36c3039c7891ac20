use actix_web::{web, HttpResponse, Responder};
use crate::core::{describe_vehicle_errors, validate_batch, Matcher, ValidationError};
use crate::models::{ErrorResponse, HealthResponse, MatchRequest};
use crate::services::SpaceCatalog;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "Vehicle Storage Matcher";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn SpaceCatalog>,
    pub matcher: Matcher,
    pub max_batch_size: usize,
}

/// Configure all storage routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_vehicles))
        .route("/spaces", web::get().to(list_spaces));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "UP".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        spaces: state.catalog.all_spaces().len(),
    })
}

/// List the storage space catalog
///
/// GET /api/storage/spaces
async fn list_spaces(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.all_spaces())
}

/// Match vehicles endpoint
///
/// POST /api/storage/match
///
/// Request body:
/// ```json
/// [
///   { "id": "v1", "type": "sedan", "length": 15.0, "width": 6.0, "height": 5.0 }
/// ]
/// ```
async fn match_vehicles(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("match_vehicles", %request_id);
    let _guard = span.enter();

    let vehicles = req.into_inner();

    tracing::info!("Received request to match {} vehicles", vehicles.len());

    // Reject the whole batch on the first problem
    if let Err(err) = validate_batch(&vehicles, state.max_batch_size) {
        tracing::warn!("Validation failed: {}", err);

        let errors = match &err {
            ValidationError::InvalidVehicle { id } => vehicles
                .iter()
                .find(|v| &v.id == id)
                .map(describe_vehicle_errors)
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        return HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()).with_errors(errors));
    }

    let results = state
        .matcher
        .match_vehicles(&vehicles, state.catalog.available_spaces());

    tracing::info!(
        "Matched {} of {} vehicles",
        results.iter().filter(|r| r.is_match()).count(),
        results.len()
    );

    HttpResponse::Ok().json(results)
}
