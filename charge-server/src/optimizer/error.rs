//! Route optimizer error types.

use crate::routing::ProviderError;

/// Errors from direction and route-optimization requests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// Missing or malformed coordinates or waypoints
    #[error("{0}")]
    InvalidInput(String),

    /// The provider succeeded but returned no candidate route
    #[error("{0}")]
    NoRouteFound(String),

    /// The provider rejected or failed the call
    #[error("routing provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider's answer could not be assembled into a result
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl RouteError {
    pub(crate) fn invalid_coordinates() -> Self {
        RouteError::InvalidInput("Invalid coordinates provided".to_string())
    }
}
