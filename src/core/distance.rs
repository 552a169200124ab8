use std::f64::consts::FRAC_PI_2;

use crate::models::{BoundingBox, Coordinates};

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Slack added to bounding boxes so rounding never rejects a point on the radius
const BOX_SLACK_DEG: f64 = 1e-9;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
///
/// Inputs are not range-checked; use [`Coordinates::new`] for that.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two coordinate values in kilometers
#[inline]
pub fn distance_km(origin: &Coordinates, target: &Coordinates) -> f64 {
    haversine_distance(origin.latitude, origin.longitude, target.latitude, target.longitude)
}

/// Calculate a bounding box around a center point
///
/// This is much faster than Haversine for pre-filtering. The box always contains
/// every point within `radius_km` of the center: it spans all longitudes when a
/// pole falls inside the circle, and wraps (`min_lon > max_lon`) when it crosses
/// the antimeridian.
///
/// # Arguments
/// * `lat` - Center latitude in degrees
/// * `lon` - Center longitude in degrees
/// * `radius_km` - Radius in kilometers; negative or NaN is treated as zero
///
/// # Returns
/// BoundingBox with min/max lat/lon
pub fn calculate_bounding_box(lat: f64, lon: f64, radius_km: f64) -> BoundingBox {
    let radius_km = if radius_km >= 0.0 { radius_km } else { 0.0 };
    let angular = radius_km / EARTH_RADIUS_KM;

    let lat_delta = angular.to_degrees() + BOX_SLACK_DEG;
    let min_lat = lat - lat_delta;
    let max_lat = lat + lat_delta;

    if min_lat <= -90.0 || max_lat >= 90.0 || angular >= FRAC_PI_2 {
        return BoundingBox {
            min_lat: min_lat.max(-90.0),
            max_lat: max_lat.min(90.0),
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    let ratio = angular.sin() / lat.to_radians().cos();
    if ratio >= 1.0 {
        return BoundingBox { min_lat, max_lat, min_lon: -180.0, max_lon: 180.0 };
    }

    let lon_delta = ratio.asin().to_degrees() + BOX_SLACK_DEG;
    if lon_delta >= 180.0 {
        return BoundingBox { min_lat, max_lat, min_lon: -180.0, max_lon: 180.0 };
    }

    let mut min_lon = lon - lon_delta;
    let mut max_lon = lon + lon_delta;
    if min_lon < -180.0 {
        min_lon += 360.0;
    }
    if max_lon > 180.0 {
        max_lon -= 360.0;
    }

    BoundingBox { min_lat, max_lat, min_lon, max_lon }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(
    lat: f64,
    lon: f64,
    bbox: &BoundingBox,
) -> bool {
    if lat < bbox.min_lat || lat > bbox.max_lat {
        return false;
    }

    if bbox.min_lon <= bbox.max_lon {
        lon >= bbox.min_lon && lon <= bbox.max_lon
    } else {
        // Wrapped across the antimeridian
        lon >= bbox.min_lon || lon <= bbox.max_lon
    }
}
