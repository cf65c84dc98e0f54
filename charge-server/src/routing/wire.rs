//! Google Directions API response DTOs and conversion.
//!
//! These types map directly to the Directions JSON API. They use `Option`
//! and `#[serde(default)]` liberally because the API omits fields rather
//! than sending null values, and only the fields we consume are declared.
//!
//! See: <https://developers.google.com/maps/documentation/directions/get-directions>

use serde::Deserialize;

use super::error::ProviderError;
use super::types::{Leg, Measure, Route, Step};

/// Top-level Directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// `"OK"`, `"ZERO_RESULTS"`, `"NOT_FOUND"`, `"REQUEST_DENIED"`,
    /// `"OVER_QUERY_LIMIT"`, `"INVALID_REQUEST"`, ...
    pub status: String,

    /// Diagnostic text accompanying a non-OK status.
    pub error_message: Option<String>,

    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    pub overview_polyline: Option<PolylineDto>,

    #[serde(default)]
    pub legs: Vec<LegDto>,

    /// Present when waypoints were sent with `optimize:true`.
    #[serde(default)]
    pub waypoint_order: Vec<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolylineDto {
    pub points: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    #[serde(default)]
    pub steps: Vec<StepDto>,
    pub distance: Option<TextValueDto>,
    pub duration: Option<TextValueDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepDto {
    /// Instruction text with HTML markup, e.g. `"Turn <b>left</b>"`.
    pub html_instructions: Option<String>,
    pub distance: Option<TextValueDto>,
    pub duration: Option<TextValueDto>,
}

/// `{"text": "1.2 km", "value": 1234}`
#[derive(Debug, Clone, Deserialize)]
pub struct TextValueDto {
    pub text: String,
    pub value: u64,
}

impl From<TextValueDto> for Measure {
    fn from(dto: TextValueDto) -> Self {
        Measure::new(dto.text, dto.value)
    }
}

/// Interpret a Directions response.
///
/// `OK` yields the routes; `ZERO_RESULTS` yields an empty list, since
/// "no route" is an answer rather than a failure. Every other status
/// is a provider error.
pub fn convert_directions(response: DirectionsResponse) -> Result<Vec<Route>, ProviderError> {
    let message = response.error_message.unwrap_or_default();

    match response.status.as_str() {
        "OK" => response.routes.into_iter().map(convert_route).collect(),
        "ZERO_RESULTS" => Ok(Vec::new()),
        "OVER_QUERY_LIMIT" => Err(ProviderError::RateLimited),
        "REQUEST_DENIED" => Err(ProviderError::Denied(message)),
        _ => Err(ProviderError::Api {
            status: response.status,
            message,
        }),
    }
}

fn convert_route(dto: RouteDto) -> Result<Route, ProviderError> {
    let polyline = dto
        .overview_polyline
        .map(|p| p.points)
        .ok_or_else(|| ProviderError::InvalidResponse("route has no overview_polyline".into()))?;

    let legs = dto
        .legs
        .into_iter()
        .map(|leg| Leg {
            steps: leg
                .steps
                .into_iter()
                .map(|step| Step {
                    instruction: step.html_instructions.unwrap_or_default(),
                    distance: step.distance.map(Measure::from),
                    duration: step.duration.map(Measure::from),
                })
                .collect(),
            distance: leg.distance.map(Measure::from),
            duration: leg.duration.map(Measure::from),
        })
        .collect();

    Ok(Route {
        polyline,
        legs,
        waypoint_order: dto.waypoint_order,
    })
}

/// Decode and interpret a raw Directions response body.
pub fn parse_directions(body: &str) -> Result<Vec<Route>, ProviderError> {
    let response: DirectionsResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;
    convert_directions(response)
}
