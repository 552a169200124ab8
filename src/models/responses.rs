use serde::{Deserialize, Serialize};
use crate::models::domain::EventInZone;
use crate::services::cache::CacheStats;

/// Response for the distance endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceResponse {
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub formatted: String,
}

/// Response for the within-radius endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithinRadiusResponse {
    #[serde(rename = "withinRadius")]
    pub within_radius: bool,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
}

/// Response carrying a display string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedResponse {
    pub formatted: String,
}

/// Response for the events-in-zone endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsInZoneResponse {
    pub matches: Vec<EventInZone>,
    #[serde(rename = "totalEvents")]
    pub total_events: usize,
    #[serde(rename = "unlocatedEvents")]
    pub unlocated_events: usize,
    #[serde(rename = "mobilityZoneKm")]
    pub mobility_zone_km: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub geocoding: bool,
    #[serde(rename = "geocodeCache")]
    pub geocode_cache: CacheStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
