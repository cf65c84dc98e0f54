//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::routing::DirectionsConfig;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8000);
const DEFAULT_STATIONS_PATH: &str = "data/stations.json";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com";

/// Errors reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: expected {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Configuration for the server binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// JSON file of station records.
    pub stations_path: PathBuf,

    /// How often to reload the catalog. `None` disables reloading.
    pub catalog_refresh: Option<Duration>,

    pub static_dir: String,

    /// Google Maps API key. Empty when unset.
    pub api_key: String,

    pub directions_base_url: String,
    pub directions_timeout_secs: u64,

    /// Serve this saved Directions response instead of calling Google.
    pub mock_directions_path: Option<PathBuf>,

    /// TTL for cached provider answers. `None` disables the cache.
    pub route_cache_ttl: Option<Duration>,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which returns a variable's
    /// value if set.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("BIND_ADDR") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "BIND_ADDR",
                value,
                expected: "a socket address such as 127.0.0.1:8000",
            })?,
            None => DEFAULT_BIND_ADDR,
        };

        let catalog_refresh_secs = secs(get("CATALOG_REFRESH_SECS"), "CATALOG_REFRESH_SECS", 86_400)?;
        let route_cache_ttl_secs = secs(get("ROUTE_CACHE_TTL_SECS"), "ROUTE_CACHE_TTL_SECS", 300)?;
        let directions_timeout_secs =
            secs(get("DIRECTIONS_TIMEOUT_SECS"), "DIRECTIONS_TIMEOUT_SECS", 30)?;
        if directions_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "DIRECTIONS_TIMEOUT_SECS",
                value: "0".to_string(),
                expected: "a positive number of seconds",
            });
        }

        Ok(Self {
            bind_addr,
            stations_path: get("STATIONS_PATH")
                .unwrap_or_else(|| DEFAULT_STATIONS_PATH.to_string())
                .into(),
            catalog_refresh: nonzero(catalog_refresh_secs),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            api_key: get("GOOGLE_MAPS_API_KEY").unwrap_or_default(),
            directions_base_url: get("DIRECTIONS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_DIRECTIONS_BASE_URL.to_string()),
            directions_timeout_secs,
            mock_directions_path: get("MOCK_DIRECTIONS_PATH").map(PathBuf::from),
            route_cache_ttl: nonzero(route_cache_ttl_secs),
        })
    }

    /// Settings for the Google Directions client.
    pub fn directions_config(&self) -> DirectionsConfig {
        DirectionsConfig::new(&self.api_key)
            .with_base_url(&self.directions_base_url)
            .with_timeout(self.directions_timeout_secs)
    }
}

fn secs(value: Option<String>, var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match value {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            value,
            expected: "a whole number of seconds",
        }),
        None => Ok(default),
    }
}

fn nonzero(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
