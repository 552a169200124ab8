// Core algorithm exports
pub mod distance;
pub mod format;
pub mod radius;
pub mod zone;

pub use distance::{haversine_distance, distance_km, calculate_bounding_box, is_within_bounding_box, EARTH_RADIUS_KM};
pub use format::{format_location, format_distance, format_distance_km, UNKNOWN_DISTANCE};
pub use radius::{within_radius, distance_between};
pub use zone::{ZoneMatcher, ZoneResult};
