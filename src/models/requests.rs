use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Coordinates, EventListing, Location};

/// Request to compute the distance between two points
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DistanceRequest {
    #[validate(nested)]
    pub origin: Coordinates,
    #[validate(nested)]
    pub target: Coordinates,
}

/// Request to check whether a target lies within a radius of an origin
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WithinRadiusRequest {
    #[validate(nested)]
    pub origin: Location,
    #[validate(nested)]
    pub target: Location,
    #[validate(range(min = 0.0))]
    #[serde(alias = "radius_km", rename = "radiusKm")]
    pub radius_km: f64,
}

/// Request to render a location as a display string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatLocationRequest {
    pub location: Location,
}

/// Request to render the distance between two locations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FormatDistanceRequest {
    #[validate(nested)]
    pub from: Location,
    #[validate(nested)]
    pub to: Location,
}

/// Request to resolve a free-text address
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeocodeRequest {
    #[validate(length(min = 1, max = 512))]
    pub address: String,
}

/// Request to list the events inside a performer's mobility zone
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventsInZoneRequest {
    #[validate(nested)]
    pub performer: Location,
    #[validate(range(min = 0.0))]
    #[serde(alias = "mobility_zone_km", rename = "mobilityZoneKm")]
    pub mobility_zone_km: Option<f64>,
    #[serde(default)]
    #[validate(nested)]
    pub events: Vec<EventListing>,
    pub limit: Option<u16>,
}
