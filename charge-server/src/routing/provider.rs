//! The routing provider capability.

use async_trait::async_trait;

use super::error::ProviderError;
use super::types::{Route, RouteRequest};

/// A service that turns an ordered list of stops into driving routes.
///
/// This abstraction allows the route optimizer to be tested with canned
/// provider answers. Implementations return zero or more candidate routes;
/// an empty list means the provider found no route, which is not an error.
/// Implementations must not retry on failure.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn get_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, ProviderError>;
}
