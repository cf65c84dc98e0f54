//! Proximity search over the station catalog.
//!
//! Given optional attribute filters and an optional reference point and
//! radius, produces either a ranked list of stations (nearest first, with
//! distances attached) or a set of heatmap positions.
//!
//! Distances are geodesic, on the WGS84 ellipsoid. Malformed proximity
//! parameters never fail a search; they disable the radius filter instead.

mod distance;
mod engine;
mod filter;

pub use distance::{Proximity, geodesic_km};
pub use engine::{
    Page, RankedStation, SearchMode, SearchOutcome, StationQuery, heatmap, rank, search,
};
pub use filter::StationFilter;
