//! Multi-stop route optimization.

use tracing::debug;

use crate::domain::GeoPoint;
use crate::routing::{RouteProvider, RouteRequest};

use super::RouteOptimizer;
use super::error::RouteError;
use super::result::{RouteResult, collect_instructions, format_km, format_minutes, sum_legs};

/// Apply the provider's `order` to `waypoints`.
///
/// An empty order means the provider kept the input order. Anything else
/// must be a permutation of `0..waypoints.len()`.
pub fn reorder_waypoints(
    waypoints: &[GeoPoint],
    order: &[usize],
) -> Result<Vec<GeoPoint>, RouteError> {
    if order.is_empty() {
        return Ok(waypoints.to_vec());
    }
    if order.len() != waypoints.len() {
        return Err(RouteError::Unexpected(format!(
            "waypoint order has {} entries for {} waypoints",
            order.len(),
            waypoints.len()
        )));
    }

    let mut seen = vec![false; waypoints.len()];
    for &i in order {
        match seen.get_mut(i) {
            Some(slot) if !*slot => *slot = true,
            _ => {
                return Err(RouteError::Unexpected(format!(
                    "waypoint order {order:?} is not a permutation"
                )));
            }
        }
    }

    Ok(order.iter().map(|&i| waypoints[i]).collect())
}

impl<P: RouteProvider + ?Sized> RouteOptimizer<'_, P> {
    /// Route from `origin` to `destination` through every waypoint, letting
    /// the provider choose the visiting order.
    ///
    /// Totals are summed over all legs of the first candidate route and
    /// formatted as kilometres and whole minutes.
    pub async fn optimize(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        waypoints: Vec<GeoPoint>,
    ) -> Result<RouteResult, RouteError> {
        if waypoints.is_empty() {
            return Err(RouteError::InvalidInput("No waypoints provided".to_string()));
        }

        let request = RouteRequest::driving(origin, destination)
            .with_waypoints(waypoints, true)
            .with_language(&self.language);
        let routes = self.provider.get_routes(&request).await?;

        let Some(route) = routes.into_iter().next() else {
            debug!(%origin, %destination, stops = request.waypoints.len(), "provider returned no optimized route");
            return Err(RouteError::NoRouteFound("No optimized route found".to_string()));
        };

        let optimized = reorder_waypoints(&request.waypoints, &route.waypoint_order)?;
        let (metres, secs) = sum_legs(&route.legs)?;

        Ok(RouteResult {
            instructions: collect_instructions(&route.legs),
            total_distance: format_km(metres),
            total_duration: format_minutes(secs),
            polyline: route.polyline,
            optimized_waypoints: Some(optimized),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{MockRouteProvider, ProviderError};
    use crate::test_support::{leg, point, route, step};
    use proptest::prelude::*;

    fn stops() -> Vec<GeoPoint> {
        vec![point(12.5, 77.5), point(12.8, 77.8), point(12.2, 77.2)]
    }

    #[tokio::test]
    async fn totals_are_summed_across_legs() {
        let provider = MockRouteProvider::with_routes(vec![route(
            vec![
                leg(vec![step("Head east", 5_000, 600)], 5_000, 600),
                leg(vec![step("Turn left", 7_345, 1_230)], 7_345, 1_230),
            ],
            vec![],
        )]);
        let result = RouteOptimizer::new(&provider)
            .optimize(point(12.0, 77.0), point(13.0, 78.0), vec![point(12.5, 77.5)])
            .await
            .unwrap();

        assert_eq!(result.total_distance, "12.3 km");
        assert_eq!(result.total_duration, "30 min");
        assert_eq!(result.instructions.len(), 2);
        assert_eq!(result.instructions[1].instruction, "Turn left");
    }

    #[tokio::test]
    async fn leg_without_distance_is_unexpected() {
        let mut incomplete = leg(vec![step("Turn left", 7_345, 1_230)], 7_345, 1_230);
        incomplete.distance = None;
        let provider = MockRouteProvider::with_routes(vec![route(
            vec![leg(vec![step("Head east", 5_000, 600)], 5_000, 600), incomplete],
            vec![],
        )]);
        let err = RouteOptimizer::new(&provider)
            .optimize(point(12.0, 77.0), point(13.0, 78.0), vec![point(12.5, 77.5)])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RouteError::Unexpected("leg has no distance value".into())
        );
    }

    #[tokio::test]
    async fn waypoints_follow_provider_order() {
        let provider = MockRouteProvider::with_routes(vec![route(
            vec![leg(vec![], 1, 1); 4],
            vec![2, 0, 1],
        )]);
        let wps = stops();
        let result = RouteOptimizer::new(&provider)
            .optimize(point(12.0, 77.0), point(13.0, 78.0), wps.clone())
            .await
            .unwrap();

        assert_eq!(result.optimized_waypoints, Some(vec![wps[2], wps[0], wps[1]]));
    }

    #[tokio::test]
    async fn request_asks_provider_to_optimize() {
        let provider = MockRouteProvider::with_routes(vec![route(vec![leg(vec![], 1, 1)], vec![])]);
        let wps = stops();
        RouteOptimizer::new(&provider)
            .optimize(point(12.0, 77.0), point(13.0, 78.0), wps.clone())
            .await
            .unwrap();

        let requests = provider.requests();
        assert!(requests[0].optimize_waypoints);
        assert_eq!(requests[0].waypoints, wps);
    }

    #[tokio::test]
    async fn empty_order_keeps_input_order() {
        let provider = MockRouteProvider::with_routes(vec![route(vec![leg(vec![], 1, 1)], vec![])]);
        let wps = stops();
        let result = RouteOptimizer::new(&provider)
            .optimize(point(12.0, 77.0), point(13.0, 78.0), wps.clone())
            .await
            .unwrap();
        assert_eq!(result.optimized_waypoints, Some(wps));
    }

    #[tokio::test]
    async fn no_waypoints_skips_provider() {
        let provider = MockRouteProvider::with_routes(vec![]);
        let err = RouteOptimizer::new(&provider)
            .optimize(point(12.0, 77.0), point(13.0, 78.0), vec![])
            .await
            .unwrap_err();

        assert_eq!(err, RouteError::InvalidInput("No waypoints provided".into()));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_route_list_is_no_optimized_route() {
        let provider = MockRouteProvider::with_routes(vec![]);
        let err = RouteOptimizer::new(&provider)
            .optimize(point(12.0, 77.0), point(13.0, 78.0), stops())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RouteError::NoRouteFound("No optimized route found".into())
        );
    }

    #[tokio::test]
    async fn provider_failure_is_propagated() {
        let provider = MockRouteProvider::failing(ProviderError::RateLimited);
        let err = RouteOptimizer::new(&provider)
            .optimize(point(12.0, 77.0), point(13.0, 78.0), stops())
            .await
            .unwrap_err();
        assert_eq!(err, RouteError::Provider(ProviderError::RateLimited));
    }

    #[tokio::test]
    async fn invalid_order_is_unexpected() {
        let provider = MockRouteProvider::with_routes(vec![route(vec![leg(vec![], 1, 1)], vec![0, 0, 1])]);
        let err = RouteOptimizer::new(&provider)
            .optimize(point(12.0, 77.0), point(13.0, 78.0), stops())
            .await
            .unwrap_err();
        assert!(matches!(err, RouteError::Unexpected(_)));
    }

    #[test]
    fn reorder_rejects_bad_orders() {
        let wps = stops();
        assert!(reorder_waypoints(&wps, &[0, 1]).is_err());
        assert!(reorder_waypoints(&wps, &[0, 1, 3]).is_err());
        assert!(reorder_waypoints(&wps, &[1, 1, 2]).is_err());
        assert_eq!(reorder_waypoints(&wps, &[0, 1, 2]).unwrap(), wps);
    }

    proptest! {
        #[test]
        fn reorder_is_a_permutation(
            order in (1usize..8).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        ) {
            let wps: Vec<GeoPoint> = (0..order.len())
                .map(|i| point(10.0 + i as f64, 70.0 + i as f64))
                .collect();
            let out = reorder_waypoints(&wps, &order).unwrap();

            prop_assert_eq!(out.len(), wps.len());
            for (pos, &idx) in order.iter().enumerate() {
                prop_assert_eq!(out[pos], wps[idx]);
            }
            for wp in &wps {
                prop_assert_eq!(out.iter().filter(|o| *o == wp).count(), 1);
            }
        }
    }
}
