// Service exports
pub mod cache;
pub mod geocoding;

pub use cache::{GeocodeCache, CacheKey, CacheStats};
pub use geocoding::{GeocodingClient, GeocodingService, GeocodingError};
