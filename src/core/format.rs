use crate::core::radius::distance_between;
use crate::models::Location;

/// Displayed when a distance cannot be computed
pub const UNKNOWN_DISTANCE: &str = "Distance inconnue";

const SEPARATOR: &str = ", ";

/// Render a location as "address, postal code, city", skipping blank parts
pub fn format_location(location: &Location) -> String {
    let parts = [
        location.address.as_deref().unwrap_or(""),
        location.postal_code.as_str(),
        location.city.as_str(),
    ];

    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Render the distance between two locations for display
///
/// Falls back to [`UNKNOWN_DISTANCE`] when either side has no coordinates.
pub fn format_distance(a: &Location, b: &Location) -> String {
    match distance_between(a, b) {
        Some(distance_km) => format_distance_km(distance_km),
        None => UNKNOWN_DISTANCE.to_string(),
    }
}

/// Render a kilometre value: metres below 1 km, whole kilometres otherwise
pub fn format_distance_km(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{} m", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{} km", distance_km.round() as i64)
    }
}
