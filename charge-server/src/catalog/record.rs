//! On-disk station records.

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, InvalidCoordinate, Station};

/// One row of the station table, as exported to JSON.
///
/// Column aliases accept the names used by the upstream EV station dataset
/// (`"Charging Station"`, `"Charging Points"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationRecord {
    pub id: i64,
    #[serde(default)]
    pub fid: i64,
    #[serde(alias = "Charging Station")]
    pub name: String,
    pub status: String,
    pub usage_type: String,
    #[serde(default)]
    pub operator: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub connection_type: String,
    pub connection_level: String,
    pub current_type: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(alias = "Charging Points")]
    pub charging_points: u32,
}

impl StationRecord {
    /// Validate the record's position and build a domain `Station`.
    pub fn into_station(self) -> Result<Station, InvalidCoordinate> {
        let location = GeoPoint::new(self.latitude, self.longitude)?;
        Ok(Station {
            id: self.id,
            fid: self.fid,
            location,
            name: self.name,
            status: self.status,
            usage_type: self.usage_type,
            // Blank operators are stored as empty strings by some exports
            operator: self.operator.filter(|o| !o.trim().is_empty()),
            address: self.address,
            city: self.city,
            state: self.state,
            connection_type: self.connection_type,
            connection_level: self.connection_level,
            current_type: self.current_type,
            charging_points: self.charging_points,
        })
    }
}

impl From<&Station> for StationRecord {
    fn from(s: &Station) -> Self {
        Self {
            id: s.id,
            fid: s.fid,
            name: s.name.clone(),
            status: s.status.clone(),
            usage_type: s.usage_type.clone(),
            operator: s.operator.clone(),
            address: s.address.clone(),
            city: s.city.clone(),
            state: s.state.clone(),
            connection_type: s.connection_type.clone(),
            connection_level: s.connection_level.clone(),
            current_type: s.current_type.clone(),
            latitude: s.latitude(),
            longitude: s.longitude(),
            charging_points: s.charging_points,
        }
    }
}
