//! Charging station entity.

use super::GeoPoint;

/// A charging station from the catalog.
///
/// Stations are read-only from the server's point of view. The scalar
/// latitude and longitude are always derived from `location`, so they
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Stable catalog identifier.
    pub id: i64,

    /// Feature id from the source dataset.
    pub fid: i64,

    /// Position of the station.
    pub location: GeoPoint,

    /// Display name (e.g., "Tata Power - Phoenix Mall")
    pub name: String,

    /// Operational status (e.g., "Operational")
    pub status: String,

    /// Access type (e.g., "Public", "Private - Restricted Access")
    pub usage_type: String,

    /// Network operator, when known.
    pub operator: Option<String>,

    pub address: String,
    pub city: String,
    pub state: String,

    /// Connector standard (e.g., "CCS (Type 2)")
    pub connection_type: String,

    /// Charging level (e.g., "Level 3: High (Over 40kW)")
    pub connection_level: String,

    /// "AC" or "DC" style descriptor.
    pub current_type: String,

    /// Number of charging points at the site.
    pub charging_points: u32,
}

impl Station {
    pub fn latitude(&self) -> f64 {
        self.location.lat()
    }

    pub fn longitude(&self) -> f64 {
        self.location.lon()
    }
}
