//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::StationCatalog;
use crate::routing::RouteProvider;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station catalog, refreshed in the background
    pub catalog: StationCatalog,

    /// Routing provider for directions and route optimization
    pub provider: Arc<dyn RouteProvider>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: StationCatalog, provider: Arc<dyn RouteProvider>) -> Self {
        Self { catalog, provider }
    }
}
