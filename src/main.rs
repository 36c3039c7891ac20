use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use vehicle_storage_matcher::config::{LoggingSettings, Settings};
use vehicle_storage_matcher::core::Matcher;
use vehicle_storage_matcher::routes::{self, AppState};
use vehicle_storage_matcher::services::StaticCatalog;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Vehicle Storage Matcher...");

    // The service still answers with an empty catalog: every vehicle gets "no match"
    let catalog = match StaticCatalog::load(&settings.catalog.path).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load storage spaces from {}: {}", settings.catalog.path, e);
            StaticCatalog::empty()
        }
    };

    let weights = settings.scoring_weights();
    let matcher = Matcher::new(weights).with_result_order(settings.matching.result_order);

    info!(
        "Matcher initialized with weights: {:?}, result order: {:?}",
        weights,
        settings.matching.result_order
    );

    let app_state = AppState {
        catalog: Arc::new(catalog),
        matcher,
        max_batch_size: settings.matching.max_batch_size,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
