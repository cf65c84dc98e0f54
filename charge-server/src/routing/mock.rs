//! Mock routing provider for development and tests.
//!
//! Serves one canned answer for every request, either built in code or
//! loaded from a saved Directions API response, and records the requests
//! it receives.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::ProviderError;
use super::provider::RouteProvider;
use super::types::{Route, RouteRequest};
use super::wire::parse_directions;

/// Mock provider that answers every request the same way.
///
/// This is useful for running the server without Google credentials.
pub struct MockRouteProvider {
    answer: Result<Vec<Route>, ProviderError>,
    requests: Mutex<Vec<RouteRequest>>,
}

impl MockRouteProvider {
    /// Answer every request with `routes`.
    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            answer: Ok(routes),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            answer: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer with a saved Directions API response body.
    ///
    /// The body is interpreted exactly like a live response, so a saved
    /// `REQUEST_DENIED` answer makes every call fail.
    pub fn from_json(body: &str) -> Result<Self, ProviderError> {
        let answer = match parse_directions(body) {
            Err(e @ ProviderError::Json { .. }) => return Err(e),
            other => other,
        };
        Ok(Self {
            answer,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Load a saved Directions API response from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|e| {
            ProviderError::NotConfigured(format!("failed to read mock directions {path:?}: {e}"))
        })?;
        Self::from_json(&body)
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RouteRequest> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RouteRequest>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl RouteProvider for MockRouteProvider {
    async fn get_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, ProviderError> {
        self.lock().push(request.clone());
        self.answer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{leg, point, route, step};
    use tempfile::tempdir;

    #[tokio::test]
    async fn records_requests() {
        let provider = MockRouteProvider::with_routes(vec![route(
            vec![leg(vec![step("Head north", 100, 10)], 100, 10)],
            vec![],
        )]);
        let request = RouteRequest::driving(point(12.0, 77.0), point(12.1, 77.1));

        let routes = provider.get_routes(&request).await.unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.requests(), vec![request]);
    }

    #[tokio::test]
    async fn failing_provider() {
        let provider = MockRouteProvider::failing(ProviderError::RateLimited);
        let request = RouteRequest::driving(point(12.0, 77.0), point(12.1, 77.1));
        assert_eq!(
            provider.get_routes(&request).await,
            Err(ProviderError::RateLimited)
        );
    }

    #[tokio::test]
    async fn load_saved_response() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("directions.json");
        std::fs::write(
            &path,
            r#"{"status": "OK", "routes": [{"overview_polyline": {"points": "abc"}, "legs": []}]}"#,
        )
        .unwrap();

        let provider = MockRouteProvider::from_file(&path).unwrap();
        let request = RouteRequest::driving(point(12.0, 77.0), point(12.1, 77.1));
        let routes = provider.get_routes(&request).await.unwrap();
        assert_eq!(routes[0].polyline, "abc");
    }

    #[test]
    fn saved_denial_loads_but_fails_calls() {
        let provider = MockRouteProvider::from_json(r#"{"status": "REQUEST_DENIED"}"#).unwrap();
        assert!(provider.answer.is_err());
        assert!(MockRouteProvider::from_json("not json").is_err());
    }
}
