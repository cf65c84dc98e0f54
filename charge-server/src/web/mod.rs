//! Web layer for the charging station finder.
//!
//! Provides HTTP endpoints for station search, directions and multi-stop
//! route optimization.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
