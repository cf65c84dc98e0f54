//! Parsing of raw route request parameters.
//!
//! Unlike proximity search, route requests reject malformed input.

use crate::domain::{GeoPoint, parse_waypoints};

use super::error::RouteError;

/// Parse a required point from raw `lat` and `lon` values.
pub fn parse_point(lat: Option<&str>, lon: Option<&str>) -> Result<GeoPoint, RouteError> {
    let (Some(lat), Some(lon)) = (lat, lon) else {
        return Err(RouteError::invalid_coordinates());
    };
    GeoPoint::parse(lat, lon).map_err(|_| RouteError::invalid_coordinates())
}

/// Parse a required `lat1,lon1|lat2,lon2|...` waypoint list.
///
/// A missing or empty list is rejected before any pair is parsed.
pub fn parse_waypoint_list(raw: Option<&str>) -> Result<Vec<GeoPoint>, RouteError> {
    let raw = raw
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| RouteError::InvalidInput("No waypoints provided".to_string()))?;
    parse_waypoints(raw).map_err(|_| RouteError::invalid_coordinates())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_requires_both_values() {
        assert!(parse_point(Some("12.9"), Some("77.5")).is_ok());
        assert_eq!(
            parse_point(None, Some("77.5")),
            Err(RouteError::invalid_coordinates())
        );
        assert_eq!(
            parse_point(Some("12.9"), Some("east")),
            Err(RouteError::invalid_coordinates())
        );
        assert_eq!(
            parse_point(Some("-95"), Some("77.5")),
            Err(RouteError::invalid_coordinates())
        );
    }

    #[test]
    fn empty_waypoints_rejected() {
        let expected = Err(RouteError::InvalidInput("No waypoints provided".into()));
        assert_eq!(parse_waypoint_list(None), expected);
        assert_eq!(parse_waypoint_list(Some("")), expected);
        assert_eq!(parse_waypoint_list(Some("  ")), expected);
    }

    #[test]
    fn malformed_waypoints_rejected() {
        assert_eq!(
            parse_waypoint_list(Some("12.9,77.5|oops")),
            Err(RouteError::invalid_coordinates())
        );
    }

    #[test]
    fn waypoints_parsed_in_order() {
        let wps = parse_waypoint_list(Some("12.9,77.5|13.0,77.6")).unwrap();
        assert_eq!(wps[0].lat_lon(), [12.9, 77.5]);
        assert_eq!(wps[1].lat_lon(), [13.0, 77.6]);
    }
}
