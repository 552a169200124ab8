// Route exports
pub mod geo;
pub mod zone;

use actix_web::{error, web, HttpResponse};
use std::sync::Arc;
use validator::ValidationErrors;

use crate::config::MatchingSettings;
use crate::core::ZoneMatcher;
use crate::models::ErrorResponse;
use crate::services::GeocodingService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<GeocodingService>,
    pub zone_matcher: ZoneMatcher,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(geo::configure)
            .configure(zone::configure),
    );
}

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(self)
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

/// 400 response for a request that failed validation
pub(crate) fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: {}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
