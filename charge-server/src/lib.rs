//! EV charging station finder server.
//!
//! Locates charging stations near a point and plans driving routes
//! through them: proximity search over a station catalog, directions to
//! a single station, and multi-stop routes in the order the routing
//! provider finds shortest.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod optimizer;
pub mod proximity;
pub mod routing;
pub mod web;

#[cfg(test)]
mod test_support;
