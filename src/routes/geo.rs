use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{distance_between, distance_km, format_distance, format_distance_km, format_location, within_radius};
use crate::models::{
    DistanceRequest, DistanceResponse, ErrorResponse, FormatDistanceRequest, FormatLocationRequest,
    FormattedResponse, GeocodeRequest, HealthResponse, WithinRadiusRequest, WithinRadiusResponse,
};
use crate::routes::{validation_failed, AppState};
use crate::services::GeocodingError;

/// Configure health and geometry routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/geo/distance", web::post().to(distance))
        .route("/geo/within-radius", web::post().to(check_within_radius))
        .route("/geo/format-location", web::post().to(render_location))
        .route("/geo/format-distance", web::post().to(render_distance))
        .route("/geo/geocode", web::post().to(geocode));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        geocoding: state.geocoder.is_configured(),
        geocode_cache: state.geocoder.cache().stats(),
    })
}

/// Distance endpoint
///
/// POST /api/v1/geo/distance
///
/// Request body:
/// ```json
/// {
///   "origin": {"latitude": 48.8566, "longitude": 2.3522},
///   "target": {"latitude": 45.764, "longitude": 4.8357}
/// }
/// ```
async fn distance(req: web::Json<DistanceRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let km = distance_km(&req.origin, &req.target);

    HttpResponse::Ok().json(DistanceResponse {
        distance_km: km,
        formatted: format_distance_km(km),
    })
}

/// Within-radius endpoint
///
/// POST /api/v1/geo/within-radius
///
/// `withinRadius` is false and `distanceKm` null when either location has no
/// coordinates.
async fn check_within_radius(req: web::Json<WithinRadiusRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(WithinRadiusResponse {
        within_radius: within_radius(&req.origin, &req.target, req.radius_km),
        distance_km: distance_between(&req.origin, &req.target),
    })
}

/// POST /api/v1/geo/format-location
async fn render_location(req: web::Json<FormatLocationRequest>) -> impl Responder {
    HttpResponse::Ok().json(FormattedResponse {
        formatted: format_location(&req.location),
    })
}

/// POST /api/v1/geo/format-distance
async fn render_distance(req: web::Json<FormatDistanceRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    HttpResponse::Ok().json(FormattedResponse {
        formatted: format_distance(&req.from, &req.to),
    })
}

/// Geocoding endpoint
///
/// POST /api/v1/geo/geocode
///
/// Request body:
/// ```json
/// { "address": "12 rue de la Gaîté, Paris" }
/// ```
///
/// 422 when the address cannot be resolved (including when no provider is
/// configured), 503 when the provider is unreachable, 502 on a malformed
/// provider response.
async fn geocode(
    state: web::Data<AppState>,
    req: web::Json<GeocodeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.geocoder.resolve(&req.address).await {
        Ok(location) => HttpResponse::Ok().json(location),
        Err(e) => {
            let (status, error) = match &e {
                GeocodingError::UnresolvedAddress { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "Unresolved address")
                }
                GeocodingError::Unavailable(_) | GeocodingError::RequestError(_) => {
                    (StatusCode::SERVICE_UNAVAILABLE, "Geocoding unavailable")
                }
                GeocodingError::InvalidResponse(_) => {
                    (StatusCode::BAD_GATEWAY, "Invalid geocoding response")
                }
            };

            tracing::warn!("Failed to geocode {:?}: {}", req.address, e);
            HttpResponse::build(status).json(ErrorResponse {
                error: error.to_string(),
                message: e.to_string(),
                status_code: status.as_u16(),
            })
        }
    }
}
