//! Domain types for the charging station locator.
//!
//! These types enforce their invariants at construction time: a `GeoPoint`
//! is always a valid WGS84 position, and a `Station` always carries one.

mod coords;
mod station;

pub use coords::{GeoPoint, InvalidCoordinate, parse_waypoints};
pub use station::Station;
