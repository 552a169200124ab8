use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::Location;

/// In-memory cache of resolved addresses
///
/// Only successful resolutions are stored; a failed lookup is retried on the
/// next request.
#[derive(Clone)]
pub struct GeocodeCache {
    entries: moka::future::Cache<String, Location>,
}

impl GeocodeCache {
    /// Create a new cache holding at most `capacity` entries for `ttl_secs`
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    /// Get a previously resolved address
    pub async fn get(&self, address: &str) -> Option<Location> {
        let key = CacheKey::geocode(address);
        let hit = self.entries.get(&key).await;
        if hit.is_some() {
            tracing::trace!("Geocode cache hit: {}", key);
        } else {
            tracing::trace!("Geocode cache miss: {}", key);
        }
        hit
    }

    /// Store a resolved address
    pub async fn insert(&self, address: &str, location: Location) {
        let key = CacheKey::geocode(address);
        tracing::trace!("Geocode cache set: {}", key);
        self.entries.insert(key, location).await;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.entry_count(),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for an address: trimmed, lowercased, whitespace collapsed
    pub fn geocode(address: &str) -> String {
        let normalized = address
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        format!("geocode:{}", normalized)
    }
}
