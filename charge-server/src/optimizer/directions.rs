//! Point-to-point directions.

use tracing::debug;

use crate::domain::GeoPoint;
use crate::routing::{RouteProvider, RouteRequest};

use super::RouteOptimizer;
use super::error::RouteError;
use super::result::{RouteResult, collect_instructions, text_or_na};

impl<P: RouteProvider + ?Sized> RouteOptimizer<'_, P> {
    /// Driving directions from `origin` to `destination`.
    ///
    /// Uses the first leg of the first candidate route. Totals are the
    /// provider's own texts, or `"N/A"` when a value is missing.
    pub async fn directions(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteResult, RouteError> {
        let request = RouteRequest::driving(origin, destination).with_language(&self.language);
        let routes = self.provider.get_routes(&request).await?;

        let Some(route) = routes.into_iter().next() else {
            debug!(%origin, %destination, "provider returned no routes");
            return Err(RouteError::NoRouteFound("No route found".to_string()));
        };
        let Some(leg) = route.legs.first() else {
            return Err(RouteError::Unexpected("route has no legs".to_string()));
        };

        Ok(RouteResult {
            instructions: collect_instructions(std::iter::once(leg)),
            total_distance: text_or_na(leg.distance.as_ref()),
            total_duration: text_or_na(leg.duration.as_ref()),
            polyline: route.polyline,
            optimized_waypoints: None,
        })
    }
}
