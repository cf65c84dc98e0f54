//! Driving directions and multi-stop route optimization.
//!
//! [`RouteOptimizer`] asks a [`RouteProvider`] for routes and turns the
//! first candidate into a [`RouteResult`]: instructions in travel order,
//! totals in kilometres and minutes, and for optimized requests the
//! waypoints in the order the provider chose to visit them.

mod directions;
mod error;
mod input;
mod optimize;
mod result;

pub use error::RouteError;
pub use input::{parse_point, parse_waypoint_list};
pub use optimize::reorder_waypoints;
pub use result::{
    Instruction, NOT_AVAILABLE, RouteResult, format_km, format_minutes, sum_legs,
};

use crate::routing::{DEFAULT_LANGUAGE, RouteProvider};

/// Plans routes against a borrowed provider.
///
/// Requests are independent; the optimizer holds no state between calls.
pub struct RouteOptimizer<'a, P: RouteProvider + ?Sized> {
    provider: &'a P,
    language: String,
}

impl<'a, P: RouteProvider + ?Sized> RouteOptimizer<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Set the language for step instructions.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}
