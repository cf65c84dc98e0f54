//! Google Directions HTTP client.

use async_trait::async_trait;

use super::error::ProviderError;
use super::provider::RouteProvider;
use super::types::{Route, RouteRequest};
use super::wire::parse_directions;

/// Default base URL for the Google Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production Google Maps)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Directions API client.
///
/// Each call is a single HTTP request bounded by the configured timeout.
/// Failures are returned as-is; nothing is retried.
#[derive(Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for DirectionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectionsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DirectionsClient {
    /// Create a new Directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Query parameters for a request, excluding the API key.
    fn query_params(request: &RouteRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origin", request.origin.to_string()),
            ("destination", request.destination.to_string()),
            ("mode", request.mode.as_str().to_string()),
            ("units", request.units.as_str().to_string()),
            ("language", request.language.clone()),
        ];

        if !request.waypoints.is_empty() {
            let mut stops: Vec<String> = request.waypoints.iter().map(|p| p.to_string()).collect();
            if request.optimize_waypoints {
                stops.insert(0, "optimize:true".to_string());
            }
            params.push(("waypoints", stops.join("|")));
        }

        params
    }
}

#[async_trait]
impl RouteProvider for DirectionsClient {
    async fn get_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "GOOGLE_MAPS_API_KEY is not set".to_string(),
            ));
        }

        let url = format!("{}/maps/api/directions/json", self.base_url);

        let mut params = Self::query_params(request);
        params.push(("key", self.api_key.clone()));

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;
        parse_directions(&body)
    }
}
