use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use yatra_algo::config::{LogFormat, LoggingSettings, Settings};
use yatra_algo::core::Recommender;
use yatra_algo::models::ScoringWeights;
use yatra_algo::routes::{self, AppState, Limits};
use yatra_algo::services::{CacheManager, Catalog};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Initialize logging; LOG_LEVEL / LOG_FORMAT override the settings file
fn init_logging(logging: &LoggingSettings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match LogFormat::parse(&format) {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Settings come first so the log level can be configured
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting Yatra Algo recommendation service...");

    let catalog = Catalog::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load catalog from {}: {}", settings.catalog.path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache_size = settings.cache.max_entries.unwrap_or(1000);
    let cache = CacheManager::new(cache_size, cache_ttl);

    info!("Cache initialized ({} entries, TTL: {}s)", cache_size, cache_ttl);

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let recommender = Recommender::new(weights);

    info!("Recommender initialized with weights: {:?}", weights);

    let defaults = Limits::default();
    let limits = Limits {
        default_limit: settings
            .recommendations
            .default_limit
            .map(usize::from)
            .unwrap_or(defaults.default_limit),
        max_limit: settings
            .recommendations
            .max_limit
            .map(usize::from)
            .unwrap_or(defaults.max_limit),
    };

    let app_state = AppState {
        catalog: Arc::new(catalog),
        cache,
        recommender,
        limits,
        default_start: settings.routing.default_start(),
        average_speed_kmh: settings.routing.average_speed_kmh,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
