use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Errors raised when building geographic values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// A point on the globe, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinates {
    /// Build coordinates, rejecting non-finite or out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(GeoError::InvalidCoordinate { latitude, longitude });
        }

        Ok(Self { latitude, longitude })
    }

    /// Great-circle distance to another point in kilometers
    #[inline]
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        crate::core::distance::distance_km(self, other)
    }
}

/// A performer's base or an event venue
///
/// Coordinates are optional: a location typed into a profile form may not have
/// been resolved yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "postalCode", default)]
    pub postal_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
}

impl Location {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Both coordinate fields, or `None` if either one is missing
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        }
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }
}

/// An event published by an organisateur
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventListing {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: Option<chrono::NaiveDate>,
    #[validate(nested)]
    pub location: Location,
}

/// An event that falls inside a performer's mobility zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInZone {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub title: String,
    pub date: Option<chrono::NaiveDate>,
    pub location: Location,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "formattedDistance")]
    pub formatted_distance: String,
    #[serde(rename = "formattedLocation")]
    pub formatted_location: String,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_reject_out_of_range() {
        assert!(Coordinates::new(48.8566, 2.3522).is_ok());
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert_eq!(
            Coordinates::new(91.0, 0.0),
            Err(GeoError::InvalidCoordinate { latitude: 91.0, longitude: 0.0 })
        );
        assert!(Coordinates::new(0.0, -180.5).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_location_requires_both_coordinates() {
        let mut location = Location::new("Paris");
        assert!(location.coordinates().is_none());

        location.latitude = Some(48.8566);
        assert!(location.coordinates().is_none());

        location.longitude = Some(2.3522);
        let coords = location.coordinates().unwrap();
        assert_eq!(coords.latitude, 48.8566);
        assert_eq!(coords.longitude, 2.3522);
    }

    #[test]
    fn test_location_json_field_names() {
        let json = r#"{"postalCode":"69001","city":"Lyon","latitude":45.764,"longitude":4.8357}"#;
        let location: Location = serde_json::from_str(json).unwrap();

        assert_eq!(location.postal_code, "69001");
        assert_eq!(location.city, "Lyon");
        assert!(location.address.is_none());
        assert!(location.has_coordinates());
    }

    #[test]
    fn test_location_validation() {
        let valid = Location::new("Lyon").with_coordinates(45.764, 4.8357);
        assert!(valid.validate().is_ok());

        let invalid = Location::new("Nowhere").with_coordinates(123.0, 4.0);
        assert!(invalid.validate().is_err());
    }
}
