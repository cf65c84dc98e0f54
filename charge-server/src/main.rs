use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use charge_server::cache::{CacheConfig, CachedRouteProvider};
use charge_server::catalog::StationCatalog;
use charge_server::config::ServerConfig;
use charge_server::routing::{DirectionsClient, MockRouteProvider, RouteProvider};
use charge_server::web::{AppState, create_router};

/// Wrap `provider` in a response cache when a TTL is configured.
fn with_cache<P: RouteProvider + 'static>(provider: P, ttl: Option<Duration>) -> Arc<dyn RouteProvider> {
    match ttl {
        Some(ttl) => {
            let config = CacheConfig {
                ttl,
                ..CacheConfig::default()
            };
            Arc::new(CachedRouteProvider::new(provider, &config))
        }
        None => Arc::new(provider),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("charge_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Load the station catalog (fail fast if unavailable)
    info!(path = %config.stations_path.display(), "loading station catalog");
    let catalog = StationCatalog::load(&config.stations_path).await?;
    info!(stations = catalog.len().await, "station catalog loaded");

    // Spawn background task to reload the catalog
    if let Some(period) = config.catalog_refresh {
        let catalog_refresh = catalog.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match catalog_refresh.refresh().await {
                    Ok(count) => info!(stations = count, "refreshed station catalog"),
                    Err(e) => warn!(error = %e, "failed to refresh station catalog"),
                }
            }
        });
    }

    // Pick the routing provider
    let provider = match &config.mock_directions_path {
        Some(path) => {
            info!(path = %path.display(), "serving canned directions");
            with_cache(MockRouteProvider::from_file(path)?, config.route_cache_ttl)
        }
        None => {
            if config.api_key.is_empty() {
                warn!("GOOGLE_MAPS_API_KEY not set; routing requests will fail");
            }
            let client = DirectionsClient::new(config.directions_config())?;
            with_cache(client, config.route_cache_ttl)
        }
    };

    let state = AppState::new(catalog, provider);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "EV charging station finder listening");
    info!("  GET /api/stations/        - Station search, heatmap, full list");
    info!("  GET /api/directions/      - Directions to a station");
    info!("  GET /api/optimize-route/  - Multi-stop optimized route");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return Err(e.into());
    }
    Ok(())
}
