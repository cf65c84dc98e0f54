//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::StationRecord;
use crate::optimizer::{Instruction, RouteResult};
use crate::proximity::{Page, Proximity, RankedStation, SearchMode, StationFilter, StationQuery};

/// Query parameters for station search.
///
/// Every value is kept as raw text: proximity parameters that fail to
/// parse disable the radius filter instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct StationSearchParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    /// Radius in kilometres
    pub distance: Option<String>,

    pub city: Option<String>,
    pub state: Option<String>,
    pub connection_type: Option<String>,
    pub charging_points: Option<String>,
    pub operator: Option<String>,

    /// Free-text search over name, city and state
    pub search: Option<String>,

    /// `"true"` for heatmap positions only
    pub heatmap: Option<String>,

    /// `"true"` for every matching station, unpaginated
    #[serde(rename = "all-india")]
    pub all_india: Option<String>,

    pub offset: Option<String>,
    pub limit: Option<String>,
}

/// A blank query value is the same as an absent one.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_count(name: &str, value: Option<&str>) -> Result<Option<usize>, String> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| format!("Invalid {name}: {v}"))
        })
        .transpose()
}

impl StationSearchParams {
    /// Build the search query.
    ///
    /// Fails only for malformed exact-match or pagination values.
    pub fn to_query(&self) -> Result<StationQuery, String> {
        let charging_points = present(&self.charging_points)
            .map(|v| {
                v.trim()
                    .parse::<i64>()
                    .map_err(|_| format!("Invalid charging_points: {v}"))
            })
            .transpose()?;

        let mut filter = StationFilter::new().with_search(present(&self.search).unwrap_or(""));
        filter.city = present(&self.city).map(str::to_string);
        filter.state = present(&self.state).map(str::to_string);
        filter.connection_type = present(&self.connection_type).map(str::to_string);
        filter.operator = present(&self.operator).map(str::to_string);
        filter.charging_points = charging_points;

        let mode = SearchMode::from_flags(self.heatmap.as_deref(), self.all_india.as_deref());

        let proximity = match mode {
            SearchMode::Heatmap => None,
            _ => self.proximity(),
        };

        let page = Page {
            offset: parse_count("offset", present(&self.offset))?.unwrap_or(0),
            limit: parse_count("limit", present(&self.limit))?,
        };

        Ok(StationQuery {
            filter,
            proximity,
            mode,
            page,
        })
    }

    fn proximity(&self) -> Option<Proximity> {
        let (lat, lon, distance) = (
            present(&self.lat),
            present(&self.lon),
            present(&self.distance),
        );
        let proximity = Proximity::parse(lat, lon, distance);
        if proximity.is_none() && lat.is_some() && lon.is_some() && distance.is_some() {
            debug!(?lat, ?lon, ?distance, "ignoring malformed proximity parameters");
        }
        proximity
    }
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    #[serde(flatten)]
    pub station: StationRecord,

    /// Kilometres from the reference point; `null` without a proximity filter
    pub distance: Option<f64>,
}

impl StationResult {
    pub fn from_ranked(ranked: &RankedStation<'_>) -> Self {
        Self {
            station: StationRecord::from(ranked.station),
            distance: ranked.distance_km,
        }
    }
}

/// Heatmap response.
#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    /// `[lat, lon]` pairs
    pub heatmap_data: Vec<[f64; 2]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HeatmapResponse {
    pub fn new(points: Vec<[f64; 2]>) -> Self {
        let message = points.is_empty().then(|| "No stations found".to_string());
        Self {
            heatmap_data: points,
            message,
        }
    }
}

/// Query parameters for point-to-point directions.
#[derive(Debug, Default, Deserialize)]
pub struct DirectionsParams {
    pub user_lat: Option<String>,
    pub user_lon: Option<String>,
    pub station_lat: Option<String>,
    pub station_lon: Option<String>,
}

/// Query parameters for route optimization.
#[derive(Debug, Default, Deserialize)]
pub struct OptimizeParams {
    pub user_lat: Option<String>,
    pub user_lon: Option<String>,

    /// `lat1,lon1|lat2,lon2|...`
    pub waypoints: Option<String>,

    pub destination_lat: Option<String>,
    pub destination_lon: Option<String>,
}

/// A turn-by-turn instruction.
#[derive(Debug, Serialize)]
pub struct InstructionResult {
    pub instruction: String,
    pub distance: String,
    pub duration: String,
}

impl From<Instruction> for InstructionResult {
    fn from(i: Instruction) -> Self {
        Self {
            instruction: i.instruction,
            distance: i.distance,
            duration: i.duration,
        }
    }
}

/// Directions or optimized route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub polyline: String,
    pub instructions: Vec<InstructionResult>,

    /// `[lat, lon]` pairs in visiting order; optimized routes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_waypoints: Option<Vec<[f64; 2]>>,

    pub total_distance: String,
    pub total_duration: String,
}

impl From<RouteResult> for RouteResponse {
    fn from(r: RouteResult) -> Self {
        Self {
            polyline: r.polyline,
            instructions: r.instructions.into_iter().map(Into::into).collect(),
            optimized_waypoints: r
                .optimized_waypoints
                .map(|wps| wps.iter().map(|p| p.lat_lon()).collect()),
            total_distance: r.total_distance,
            total_duration: r.total_duration,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
