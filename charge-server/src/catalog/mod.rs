//! Station catalog.
//!
//! Loads charging stations from a JSON export of the station table,
//! validates them, and serves read-only snapshots to concurrent requests.
//! The catalog can be refreshed in the background.

mod error;
mod record;
mod store;

pub use error::CatalogError;
pub use record::StationRecord;
pub use store::StationCatalog;
