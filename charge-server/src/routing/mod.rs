//! Routing provider: turn ordered stops into driving routes.
//!
//! The [`RouteProvider`] trait is the seam between the route optimizer
//! and the outside world. [`DirectionsClient`] implements it against the
//! Google Directions API; [`MockRouteProvider`] serves canned answers.
//!
//! Key characteristics of the Directions API:
//! - A request with `optimize:true` waypoints returns `waypoint_order`,
//!   the permutation the provider chose
//! - `ZERO_RESULTS` is a normal answer meaning "no route"
//! - Errors arrive as HTTP 200 with a non-`OK` `status` field

mod error;
mod google;
mod mock;
mod provider;
mod types;
mod wire;

pub use error::ProviderError;
pub use google::{DirectionsClient, DirectionsConfig};
pub use mock::MockRouteProvider;
pub use provider::RouteProvider;
pub use types::{
    DEFAULT_LANGUAGE, Leg, Measure, Route, RouteRequest, Step, TravelMode, UnitSystem,
};
pub use wire::{DirectionsResponse, convert_directions, parse_directions};
