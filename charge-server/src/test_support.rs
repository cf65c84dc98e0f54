//! Fixtures shared by unit tests.

use crate::domain::{GeoPoint, Station};
use crate::routing::{Leg, Measure, Route, Step};

/// Build a station with plausible defaults for the fields tests rarely vary.
pub fn station(id: i64, name: &str, city: &str, state: &str, lat: f64, lon: f64) -> Station {
    Station {
        id,
        fid: id * 10,
        location: GeoPoint::new(lat, lon).unwrap(),
        name: name.to_string(),
        status: "Operational".to_string(),
        usage_type: "Public".to_string(),
        operator: None,
        address: format!("{id} Main Road"),
        city: city.to_string(),
        state: state.to_string(),
        connection_type: "CCS (Type 2)".to_string(),
        connection_level: "Level 3: High (Over 40kW)".to_string(),
        current_type: "DC".to_string(),
        charging_points: 2,
    }
}

pub fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).unwrap()
}

/// A step with both measures present.
pub fn step(instruction: &str, metres: u64, secs: u64) -> Step {
    Step {
        instruction: instruction.to_string(),
        distance: Some(Measure::new(format!("{metres} m"), metres)),
        duration: Some(Measure::new(format!("{} mins", secs / 60), secs)),
    }
}

/// A leg whose totals are the given values.
pub fn leg(steps: Vec<Step>, metres: u64, secs: u64) -> Leg {
    Leg {
        steps,
        distance: Some(Measure::new(format!("{:.1} km", metres as f64 / 1000.0), metres)),
        duration: Some(Measure::new(format!("{} mins", secs / 60), secs)),
    }
}

pub fn route(legs: Vec<Leg>, waypoint_order: Vec<usize>) -> Route {
    Route {
        polyline: "_p~iF~ps|U_ulLnnqC_mqNvxq`@".to_string(),
        legs,
        waypoint_order,
    }
}
