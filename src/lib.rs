//! Geomatch - geolocation matching for the humoristes/organisateurs marketplace
//!
//! This library computes great-circle distances, checks whether an event falls
//! inside a performer's mobility zone, renders locations and distances for
//! display, and resolves free-text addresses through a geocoding provider.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    ZoneMatcher, ZoneResult, UNKNOWN_DISTANCE,
    haversine_distance, within_radius, format_location, format_distance,
};
pub use models::{Coordinates, Location, GeoError, EventListing, EventInZone};
pub use services::{GeocodingService, GeocodingError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let paris = Location::new("Paris").with_coordinates(48.8566, 2.3522);
        assert!(within_radius(&paris, &paris, 0.0));
        assert_eq!(format_location(&paris), "Paris");
    }
}
