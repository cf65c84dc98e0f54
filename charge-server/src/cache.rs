//! Caching layer for routing provider responses.
//!
//! Identical routing requests (same stops, order, options) within the TTL
//! are answered from memory. Only successful answers are cached; errors
//! always go back to the caller and the next request tries the provider
//! again. Caching is an optimisation only: every request is still computed
//! independently from whatever routes the cache returns.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::GeoPoint;
use crate::routing::{ProviderError, Route, RouteProvider, RouteRequest, TravelMode, UnitSystem};

/// Cache key for a routing request.
///
/// Coordinates are compared by bit pattern, so `12.5` and `12.50` match but
/// no rounding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RouteKey {
    origin: (u64, u64),
    destination: (u64, u64),
    waypoints: Vec<(u64, u64)>,
    optimize_waypoints: bool,
    mode: TravelMode,
    units: UnitSystem,
    language: String,
}

fn bits(p: &GeoPoint) -> (u64, u64) {
    (p.lat().to_bits(), p.lon().to_bits())
}

impl From<&RouteRequest> for RouteKey {
    fn from(req: &RouteRequest) -> Self {
        Self {
            origin: bits(&req.origin),
            destination: bits(&req.destination),
            waypoints: req.waypoints.iter().map(bits).collect(),
            optimize_waypoints: req.optimize_waypoints,
            mode: req.mode,
            units: req.units,
            language: req.language.clone(),
        }
    }
}

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Routing provider with caching.
///
/// Wraps any `RouteProvider` and caches successful answers.
pub struct CachedRouteProvider<P> {
    inner: P,
    routes: MokaCache<RouteKey, Arc<Vec<Route>>>,
}

impl<P: RouteProvider> CachedRouteProvider<P> {
    /// Create a new cached provider.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, routes }
    }

    /// Access the underlying provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: RouteProvider> RouteProvider for CachedRouteProvider<P> {
    async fn get_routes(&self, request: &RouteRequest) -> Result<Vec<Route>, ProviderError> {
        let key = RouteKey::from(request);

        if let Some(cached) = self.routes.get(&key).await {
            debug!(origin = %request.origin, destination = %request.destination, "route cache hit");
            return Ok(cached.as_ref().clone());
        }

        let routes = self.inner.get_routes(request).await?;
        self.routes.insert(key, Arc::new(routes.clone())).await;

        Ok(routes)
    }
}
