//! Provider-neutral routing request and response types.

use crate::domain::GeoPoint;

/// Travel mode requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TravelMode {
    #[default]
    Driving,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
        }
    }
}

/// Unit system for the provider's human-readable texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    #[default]
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
        }
    }
}

/// Default language for step instructions.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A routing request: fixed endpoints and optional intermediate stops.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,

    /// Intermediate stops, in the order given by the caller.
    pub waypoints: Vec<GeoPoint>,

    /// Ask the provider to reorder `waypoints`. Origin and destination
    /// stay first and last.
    pub optimize_waypoints: bool,

    pub mode: TravelMode,
    pub units: UnitSystem,
    pub language: String,
}

impl RouteRequest {
    /// A driving request between two points, without waypoints.
    pub fn driving(origin: GeoPoint, destination: GeoPoint) -> Self {
        Self {
            origin,
            destination,
            waypoints: Vec::new(),
            optimize_waypoints: false,
            mode: TravelMode::Driving,
            units: UnitSystem::Metric,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Add waypoints, optionally letting the provider reorder them.
    pub fn with_waypoints(mut self, waypoints: Vec<GeoPoint>, optimize: bool) -> Self {
        self.waypoints = waypoints;
        self.optimize_waypoints = optimize;
        self
    }

    /// Set the instruction language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// A distance or duration as the provider reports it: display text plus
/// the value in base units (metres or seconds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    pub text: String,
    pub value: u64,
}

impl Measure {
    pub fn new(text: impl Into<String>, value: u64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// One manoeuvre within a leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Human-readable instruction (may contain HTML markup).
    pub instruction: String,
    pub distance: Option<Measure>,
    pub duration: Option<Measure>,
}

/// Travel between two consecutive stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub steps: Vec<Step>,
    pub distance: Option<Measure>,
    pub duration: Option<Measure>,
}

/// A candidate route returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Encoded polyline of the whole route.
    pub polyline: String,

    /// Legs in travel order.
    pub legs: Vec<Leg>,

    /// Visiting order of the request's waypoints, as indices into
    /// `RouteRequest::waypoints`. Empty when no reordering was requested.
    pub waypoint_order: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::point;

    #[test]
    fn driving_defaults() {
        let req = RouteRequest::driving(point(12.0, 77.0), point(13.0, 78.0));
        assert_eq!(req.mode.as_str(), "driving");
        assert_eq!(req.units.as_str(), "metric");
        assert_eq!(req.language, "en");
        assert!(req.waypoints.is_empty());
        assert!(!req.optimize_waypoints);
    }

    #[test]
    fn builder() {
        let req = RouteRequest::driving(point(12.0, 77.0), point(13.0, 78.0))
            .with_waypoints(vec![point(12.5, 77.5)], true)
            .with_language("hi");
        assert_eq!(req.waypoints.len(), 1);
        assert!(req.optimize_waypoints);
        assert_eq!(req.language, "hi");
    }
}
