use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{EventsInZoneRequest, EventsInZoneResponse};
use crate::routes::{validation_failed, AppState};

/// Configure mobility zone routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/zone/events", web::post().to(events_in_zone));
}

/// Events-in-zone endpoint
///
/// POST /api/v1/zone/events
///
/// Request body:
/// ```json
/// {
///   "performer": {"city": "Paris", "postalCode": "75011", "latitude": 48.85, "longitude": 2.37},
///   "mobilityZoneKm": 80,
///   "events": [{"id": "evt-1", "title": "Scène ouverte", "date": "2026-11-14", "location": {...}}],
///   "limit": 20
/// }
/// ```
async fn events_in_zone(
    state: web::Data<AppState>,
    req: web::Json<EventsInZoneRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let radius_km = req.mobility_zone_km.unwrap_or(state.matching.default_radius_km);
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    tracing::info!(
        "Matching {} events within {} km (limit {})",
        req.events.len(),
        radius_km,
        limit
    );

    if !req.performer.has_coordinates() {
        tracing::warn!("Performer location {:?} has no coordinates", req.performer.city);
    }

    let result = state
        .zone_matcher
        .events_in_zone(&req.performer, radius_km, req.events, limit);

    tracing::debug!(
        "Returning {} of {} events ({} without coordinates)",
        result.matches.len(),
        result.total_events,
        result.unlocated_events
    );

    HttpResponse::Ok().json(EventsInZoneResponse {
        matches: result.matches,
        total_events: result.total_events,
        unlocated_events: result.unlocated_events,
        mobility_zone_km: result.mobility_zone_km,
    })
}
