use crate::config::GeocodingSettings;
use crate::models::{Coordinates, Location};
use crate::services::cache::GeocodeCache;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when resolving an address
#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Address could not be resolved: {address} ({reason})")]
    UnresolvedAddress { address: String, reason: String },

    #[error("Geocoding provider unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP client error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl GeocodingError {
    fn unresolved(address: &str, reason: &str) -> Self {
        Self::UnresolvedAddress {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Client for a Nominatim-compatible search API
///
/// Sends `GET {base_url}/search?q=...&format=jsonv2&addressdetails=1&limit=1`
/// and maps the best candidate to a [`Location`].
pub struct GeocodingClient {
    base_url: String,
    country_codes: Option<String>,
    client: Client,
}

/// One candidate returned by the provider
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    address: PlaceAddress,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceAddress {
    house_number: Option<String>,
    road: Option<String>,
    postcode: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
}

impl Place {
    fn into_location(self) -> Result<Location, GeocodingError> {
        let latitude: f64 = self
            .lat
            .parse()
            .map_err(|_| GeocodingError::InvalidResponse(format!("Bad latitude: {}", self.lat)))?;
        let longitude: f64 = self
            .lon
            .parse()
            .map_err(|_| GeocodingError::InvalidResponse(format!("Bad longitude: {}", self.lon)))?;
        let coords = Coordinates::new(latitude, longitude)
            .map_err(|e| GeocodingError::InvalidResponse(e.to_string()))?;

        let PlaceAddress { house_number, road, postcode, city, town, village, municipality } =
            self.address;

        let street = match (house_number, road) {
            (Some(number), Some(road)) => Some(format!("{} {}", number, road)),
            (None, Some(road)) => Some(road),
            _ => None,
        };

        Ok(Location {
            address: street,
            postal_code: postcode.unwrap_or_default(),
            city: city.or(town).or(village).or(municipality).unwrap_or_default(),
            latitude: Some(coords.latitude),
            longitude: Some(coords.longitude),
        })
    }
}

impl GeocodingClient {
    /// Create a new geocoding client
    pub fn new(
        base_url: String,
        user_agent: &str,
        timeout: Duration,
        country_codes: Option<String>,
    ) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            base_url,
            country_codes,
            client,
        })
    }

    /// Look up a free-text address with the provider
    pub async fn search(&self, address: &str) -> Result<Location, GeocodingError> {
        let mut url = format!(
            "{}/search?q={}&format=jsonv2&addressdetails=1&limit=1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(address)
        );
        if let Some(codes) = &self.country_codes {
            url.push_str("&countrycodes=");
            url.push_str(&urlencoding::encode(codes));
        }

        tracing::debug!("Geocoding request: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeocodingError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Geocoding provider returned {} for {:?}", status, address);
            return Err(GeocodingError::Unavailable(format!(
                "Provider returned {}",
                status
            )));
        }

        // A stalled or dropped body is a transport failure, not bad data
        let body = response
            .bytes()
            .await
            .map_err(|e| GeocodingError::Unavailable(e.to_string()))?;

        let places: Vec<Place> = serde_json::from_slice(&body)
            .map_err(|e| GeocodingError::InvalidResponse(format!("Failed to parse places: {}", e)))?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::unresolved(address, "no match from provider"))?;

        place.into_location()
    }
}

/// Address resolution with caching
///
/// Without a configured provider every lookup fails with
/// [`GeocodingError::UnresolvedAddress`].
pub struct GeocodingService {
    provider: Option<GeocodingClient>,
    cache: GeocodeCache,
}

impl GeocodingService {
    pub fn new(provider: Option<GeocodingClient>, cache: GeocodeCache) -> Self {
        Self { provider, cache }
    }

    /// Build the service from configuration
    pub fn from_settings(settings: &GeocodingSettings) -> Result<Self, GeocodingError> {
        let provider = match settings.endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => Some(GeocodingClient::new(
                endpoint.to_string(),
                &settings.user_agent,
                Duration::from_secs(settings.timeout_secs),
                settings.country_codes.clone(),
            )?),
            _ => None,
        };

        let cache = GeocodeCache::new(settings.cache_size, settings.cache_ttl_secs);
        Ok(Self::new(provider, cache))
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn cache(&self) -> &GeocodeCache {
        &self.cache
    }

    /// Resolve a free-text address to a location with coordinates
    pub async fn resolve(&self, address: &str) -> Result<Location, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::unresolved(address, "empty address"));
        }

        let Some(provider) = &self.provider else {
            tracing::warn!("Geocoding requested but no provider is configured");
            return Err(GeocodingError::unresolved(address, "no geocoding provider configured"));
        };

        if let Some(location) = self.cache.get(address).await {
            return Ok(location);
        }

        let location = provider.search(address).await?;
        self.cache.insert(address, location.clone()).await;

        tracing::debug!("Resolved {:?} to {:?}", address, location.coordinates());
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_into_location() {
        let place: Place = serde_json::from_str(
            r#"{
                "lat": "48.8606",
                "lon": "2.3376",
                "address": {"house_number": "1", "road": "Rue de Rivoli", "postcode": "75001", "city": "Paris"}
            }"#,
        )
        .unwrap();

        let location = place.into_location().unwrap();
        assert_eq!(location.address.as_deref(), Some("1 Rue de Rivoli"));
        assert_eq!(location.postal_code, "75001");
        assert_eq!(location.city, "Paris");
        assert_eq!(location.latitude, Some(48.8606));
    }

    #[test]
    fn test_place_falls_back_to_town() {
        let place: Place = serde_json::from_str(
            r#"{"lat": "43.5", "lon": "5.4", "address": {"town": "Aix"}}"#,
        )
        .unwrap();

        let location = place.into_location().unwrap();
        assert!(location.address.is_none());
        assert_eq!(location.city, "Aix");
        assert_eq!(location.postal_code, "");
    }

    #[test]
    fn test_place_with_bad_coordinates() {
        let place: Place = serde_json::from_str(r#"{"lat": "north", "lon": "2.3"}"#).unwrap();
        assert!(matches!(place.into_location(), Err(GeocodingError::InvalidResponse(_))));

        let place: Place = serde_json::from_str(r#"{"lat": "95.0", "lon": "2.3"}"#).unwrap();
        assert!(matches!(place.into_location(), Err(GeocodingError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_service_fails() {
        let service = GeocodingService::new(None, GeocodeCache::new(10, 60));

        assert!(!service.is_configured());
        let err = service.resolve("12 rue de la Paix, Paris").await.unwrap_err();
        assert!(matches!(err, GeocodingError::UnresolvedAddress { .. }));
    }
}
