//! Geodesic distance and radius parameters.

use geo::{Distance, Geodesic};

use crate::domain::GeoPoint;

/// Distance in kilometres between two points on the WGS84 ellipsoid.
///
/// This is the only distance computation used for proximity search: the
/// radius filter and the distance reported to clients both come from it.
pub fn geodesic_km(a: GeoPoint, b: GeoPoint) -> f64 {
    if a == b {
        return 0.0;
    }
    Geodesic.distance(a.to_geo(), b.to_geo()) / 1000.0
}

/// A reference point and search radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl Proximity {
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// Parse raw `lat`, `lon` and `distance` query values.
    ///
    /// Returns `None` unless all three are present, non-empty and valid.
    /// Callers treat `None` as "no proximity filter", never as an error.
    /// A negative radius is valid and matches nothing.
    pub fn parse(lat: Option<&str>, lon: Option<&str>, distance: Option<&str>) -> Option<Self> {
        let (lat, lon, distance) = (
            lat.filter(|s| !s.is_empty())?,
            lon.filter(|s| !s.is_empty())?,
            distance.filter(|s| !s.is_empty())?,
        );

        let center = GeoPoint::parse(lat, lon).ok()?;
        let radius_km = distance.trim().parse::<f64>().ok()?;
        if radius_km.is_nan() {
            return None;
        }

        Some(Self { center, radius_km })
    }

    /// Distance from the center to `point`, if within the radius.
    pub fn distance_within(&self, point: GeoPoint) -> Option<f64> {
        let km = geodesic_km(self.center, point);
        (km <= self.radius_km).then_some(km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::point;

    #[test]
    fn known_distance() {
        // Connaught Place, Delhi to Gateway of India, Mumbai: ~1,165 km
        let delhi = point(28.6315, 77.2167);
        let mumbai = point(18.9220, 72.8347);
        let km = geodesic_km(delhi, mumbai);
        assert!((km - 1_165.0).abs() < 15.0, "got {km}");
    }

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = point(12.9716, 77.5946);
        let b = point(13.0827, 80.2707);
        assert!((geodesic_km(a, b) - geodesic_km(b, a)).abs() < 1e-9);
        assert_eq!(geodesic_km(a, a), 0.0);
    }

    #[test]
    fn parse_requires_all_values() {
        assert!(Proximity::parse(Some("12.9"), Some("77.5"), Some("10")).is_some());
        assert!(Proximity::parse(None, Some("77.5"), Some("10")).is_none());
        assert!(Proximity::parse(Some("12.9"), Some("77.5"), None).is_none());
        assert!(Proximity::parse(Some("12.9"), Some(""), Some("10")).is_none());
    }

    #[test]
    fn parse_falls_back_on_garbage() {
        assert!(Proximity::parse(Some("12.9"), Some("77.5"), Some("abc")).is_none());
        assert!(Proximity::parse(Some("north"), Some("77.5"), Some("10")).is_none());
        assert!(Proximity::parse(Some("120"), Some("77.5"), Some("10")).is_none());
        assert!(Proximity::parse(Some("12.9"), Some("77.5"), Some("NaN")).is_none());
    }

    #[test]
    fn negative_radius_parses_but_matches_nothing() {
        let p = Proximity::parse(Some("12.9"), Some("77.5"), Some("-1")).unwrap();
        assert_eq!(p.radius_km, -1.0);
        assert_eq!(p.distance_within(p.center), None);
    }

    #[test]
    fn zero_radius_matches_coincident_point_only() {
        let center = point(12.9, 77.5);
        let p = Proximity::new(center, 0.0);
        assert_eq!(p.distance_within(center), Some(0.0));
        assert_eq!(p.distance_within(point(12.9001, 77.5)), None);
    }
}
