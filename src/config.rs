use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub geocoding: GeocodingSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Geocoding provider settings
///
/// Leaving `endpoint` unset disables address resolution.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingSettings {
    pub endpoint: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub country_codes: Option<String>,
    #[serde(default = "default_cache_size")]
    pub cache_size: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for GeocodingSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            country_codes: None,
            cache_size: default_cache_size(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_user_agent() -> String { format!("geomatch/{}", env!("CARGO_PKG_VERSION")) }
fn default_timeout_secs() -> u64 { 5 }
fn default_cache_size() -> u64 { 10_000 }
fn default_cache_ttl_secs() -> u64 { 86_400 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    #[serde(default = "default_max_radius_km")]
    pub max_radius_km: f64,
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
            max_radius_km: default_max_radius_km(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_radius_km() -> f64 { 50.0 }
fn default_max_radius_km() -> f64 { 1000.0 }
fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with GEOMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., GEOMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        settings.validate()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        settings.validate()
    }

    /// Reject radii that cannot bound a mobility zone
    fn validate(self) -> Result<Self, ConfigError> {
        let matching = &self.matching;
        for (name, value) in [
            ("matching.max_radius_km", matching.max_radius_km),
            ("matching.default_radius_km", matching.default_radius_km),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(self)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("GEOMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_radius_km, 50.0);
        assert_eq!(matching.max_radius_km, 1000.0);
        assert_eq!(matching.default_limit, 20);
        assert_eq!(matching.max_limit, 100);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "compact");
    }

    #[test]
    fn test_geocoding_disabled_by_default() {
        let settings = Settings::default();
        assert!(settings.geocoding.endpoint.is_none());
        assert_eq!(settings.geocoding.timeout_secs, 5);
    }

    #[test]
    fn test_load_from_partial_file() {
        let path = std::env::temp_dir().join(format!("geomatch-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9090\n\n[geocoding]\nendpoint = \"https://nominatim.example.org\"\n"
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(
            settings.geocoding.endpoint.as_deref(),
            Some("https://nominatim.example.org")
        );
        assert_eq!(settings.matching.max_limit, 100);
    }

    #[test]
    fn test_load_from_rejects_negative_max_radius() {
        let path = std::env::temp_dir().join(format!("geomatch-radius-{}.toml", std::process::id()));
        std::fs::write(&path, "[matching]\nmax_radius_km = -5.0\n").unwrap();

        let result = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("matching.max_radius_km"), "{}", err);
    }
}
