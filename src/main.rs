use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use geomatch::config::{LoggingSettings, Settings};
use geomatch::core::ZoneMatcher;
use geomatch::routes::{self, handle_json_payload_error, AppState};
use geomatch::services::GeocodingService;
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting Geomatch service...");
    info!("Configuration loaded successfully");

    // Initialize geocoding (optional - lookups fail cleanly without a provider)
    let geocoder = GeocodingService::from_settings(&settings.geocoding).map_err(|e| {
        error!("Failed to initialize geocoding client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    if geocoder.is_configured() {
        info!(
            "Geocoding provider configured (cache: {} entries, TTL: {}s)",
            settings.geocoding.cache_size, settings.geocoding.cache_ttl_secs
        );
    } else {
        warn!("No geocoding endpoint configured, address resolution is disabled");
    }

    let zone_matcher = ZoneMatcher::new(settings.matching.max_radius_km);

    info!(
        "Zone matcher initialized (default radius: {} km, max radius: {} km)",
        settings.matching.default_radius_km, settings.matching.max_radius_km
    );

    // Build application state
    let app_state = AppState {
        geocoder: Arc::new(geocoder),
        zone_matcher,
        matching: settings.matching.clone(),
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
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
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

/// Initialize logging; `LOG_LEVEL` and `LOG_FORMAT` override the settings
fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}
