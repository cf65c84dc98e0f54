//! Geographic coordinate types.

use std::fmt;

/// Error returned when a latitude/longitude pair is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

impl InvalidCoordinate {
    /// Why the coordinate was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A WGS84 (SRID 4326) position.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// Any `GeoPoint` value is valid by construction.
///
/// # Examples
///
/// ```
/// use charge_server::domain::GeoPoint;
///
/// let blr = GeoPoint::new(12.9716, 77.5946).unwrap();
/// assert_eq!(blr.lat(), 12.9716);
/// assert_eq!(blr.to_string(), "12.9716,77.5946");
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::parse("abc", "77.5").is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a point from decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidCoordinate {
                reason: "coordinates must be finite numbers",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinate {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lon })
    }

    /// Parse a point from decimal-degree strings.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(lat: &str, lon: &str) -> Result<Self, InvalidCoordinate> {
        Self::new(parse_degrees(lat)?, parse_degrees(lon)?)
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// The `[lat, lon]` pair, in the order clients expect.
    pub fn lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_geo(self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

fn parse_degrees(s: &str) -> Result<f64, InvalidCoordinate> {
    s.trim().parse::<f64>().map_err(|_| InvalidCoordinate {
        reason: "coordinate is not a number",
    })
}

/// Parse a `lat1,lon1|lat2,lon2|...` waypoint list.
///
/// Order is preserved. Every segment must hold exactly one comma-separated
/// pair; an empty segment is rejected.
pub fn parse_waypoints(s: &str) -> Result<Vec<GeoPoint>, InvalidCoordinate> {
    s.split('|')
        .map(|pair| {
            let mut parts = pair.split(',');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(lat), Some(lon), None) => GeoPoint::parse(lat, lon),
                _ => Err(InvalidCoordinate {
                    reason: "waypoint must be a lat,lon pair",
                }),
            }
        })
        .collect()
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.lat, self.lon)
    }
}

/// Formats as `lat,lon`, the form routing providers accept.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoPoint::new(90.0001, 0.0).is_err());
        assert!(GeoPoint::new(-91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 180.5).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::parse("nan", "0").is_err());
        assert!(GeoPoint::parse("inf", "0").is_err());
    }

    #[test]
    fn parse_trims_whitespace() {
        let p = GeoPoint::parse(" 28.6139", "77.2090 ").unwrap();
        assert_eq!(p.lat(), 28.6139);
        assert_eq!(p.lon(), 77.209);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = GeoPoint::parse("abc", "77.2").unwrap_err();
        assert_eq!(err.reason(), "coordinate is not a number");
        assert!(GeoPoint::parse("", "77.2").is_err());
    }

    #[test]
    fn display_and_debug() {
        let p = GeoPoint::new(19.076, 72.8777).unwrap();
        assert_eq!(p.to_string(), "19.076,72.8777");
        assert_eq!(format!("{:?}", p), "GeoPoint(19.076, 72.8777)");
    }

    #[test]
    fn to_geo_swaps_axes() {
        let p = GeoPoint::new(10.0, 20.0).unwrap().to_geo();
        assert_eq!(p.x(), 20.0);
        assert_eq!(p.y(), 10.0);
    }

    #[test]
    fn parse_waypoints_keeps_order() {
        let wps = parse_waypoints("12.97,77.59|13.08,80.27|17.38,78.48").unwrap();
        assert_eq!(wps.len(), 3);
        assert_eq!(wps[0].lat_lon(), [12.97, 77.59]);
        assert_eq!(wps[2].lat_lon(), [17.38, 78.48]);
    }

    #[test]
    fn parse_waypoints_single() {
        let wps = parse_waypoints("12.97,77.59").unwrap();
        assert_eq!(wps.len(), 1);
    }

    #[test]
    fn parse_waypoints_rejects_malformed() {
        assert!(parse_waypoints("").is_err());
        assert!(parse_waypoints("12.97").is_err());
        assert!(parse_waypoints("12.97,77.59,1").is_err());
        assert!(parse_waypoints("12.97,77.59|").is_err());
        assert!(parse_waypoints("12.97,abc").is_err());
        assert!(parse_waypoints("95,77.59").is_err());
    }
}
