//! Assembled route results and unit conversion.

use crate::domain::GeoPoint;
use crate::routing::{Leg, Measure, Step};

use super::error::RouteError;

/// Placeholder for a distance or duration the provider did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// One turn-by-turn instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub instruction: String,
    pub distance: String,
    pub duration: String,
}

impl Instruction {
    pub fn from_step(step: &Step) -> Self {
        Self {
            instruction: step.instruction.clone(),
            distance: text_or_na(step.distance.as_ref()),
            duration: text_or_na(step.duration.as_ref()),
        }
    }
}

/// A route ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Encoded polyline of the full path.
    pub polyline: String,

    /// Instructions across all legs, in travel order.
    pub instructions: Vec<Instruction>,

    pub total_distance: String,
    pub total_duration: String,

    /// Input waypoints in the visiting order the provider chose.
    /// Only set for optimized routes.
    pub optimized_waypoints: Option<Vec<GeoPoint>>,
}

pub(crate) fn text_or_na(measure: Option<&Measure>) -> String {
    measure.map_or_else(|| NOT_AVAILABLE.to_string(), |m| m.text.clone())
}

/// Instructions for every step of every leg, leg order then step order.
pub(crate) fn collect_instructions<'a>(legs: impl IntoIterator<Item = &'a Leg>) -> Vec<Instruction> {
    legs.into_iter()
        .flat_map(|leg| leg.steps.iter().map(Instruction::from_step))
        .collect()
}

/// Total distance and duration of `legs`, in metres and seconds.
///
/// Every leg must carry both values.
pub fn sum_legs(legs: &[Leg]) -> Result<(u64, u64), RouteError> {
    legs.iter().try_fold((0, 0), |(metres, secs), leg| {
        let distance = leg
            .distance
            .as_ref()
            .ok_or_else(|| RouteError::Unexpected("leg has no distance value".to_string()))?;
        let duration = leg
            .duration
            .as_ref()
            .ok_or_else(|| RouteError::Unexpected("leg has no duration value".to_string()))?;
        Ok((metres + distance.value, secs + duration.value))
    })
}

/// Metres as kilometres with one decimal place, e.g. `"12.3 km"`.
pub fn format_km(metres: u64) -> String {
    format!("{:.1} km", metres as f64 / 1000.0)
}

/// Seconds as whole minutes, truncated, e.g. `"30 min"`.
pub fn format_minutes(secs: u64) -> String {
    format!("{} min", secs / 60)
}
