//! In-memory station catalog.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::Station;

use super::error::CatalogError;
use super::record::StationRecord;

/// Thread-safe, read-mostly station catalog.
///
/// Readers take a [`snapshot`](Self::snapshot), which is an `Arc` of the
/// current station list; the lock is released before any query runs.
/// A background refresh swaps in a new list without disturbing readers
/// that hold the old one.
#[derive(Clone)]
pub struct StationCatalog {
    inner: Arc<RwLock<Arc<Vec<Station>>>>,
    source: Option<PathBuf>,
}

impl StationCatalog {
    /// Load the catalog from a JSON file of station records.
    ///
    /// Records with invalid positions or duplicate ids are skipped with a
    /// warning; an unreadable or unparseable file is an error.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let stations = read_stations(&path).await?;

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(stations))),
            source: Some(path),
        })
    }

    /// Create a fixed catalog from stations already in memory.
    ///
    /// `refresh` on such a catalog leaves it unchanged.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(stations))),
            source: None,
        }
    }

    /// The current station list.
    pub async fn snapshot(&self) -> Arc<Vec<Station>> {
        let guard = self.inner.read().await;
        Arc::clone(&*guard)
    }

    /// Number of stations in the catalog.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Path the catalog was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Reload the catalog from its source file.
    ///
    /// On success, replaces the current list. On failure, the existing
    /// list is preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, CatalogError> {
        let Some(path) = &self.source else {
            return Ok(self.len().await);
        };

        let stations = read_stations(path).await?;
        let count = stations.len();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(stations);

        Ok(count)
    }
}

async fn read_stations(path: &Path) -> Result<Vec<Station>, CatalogError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let records: Vec<StationRecord> =
        serde_json::from_str(&contents).map_err(|e| CatalogError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(build_catalog(records))
}

/// Convert records to stations, dropping invalid and duplicate entries.
fn build_catalog(records: Vec<StationRecord>) -> Vec<Station> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id;
            if !seen.insert(id) {
                warn!(id, "skipping duplicate station id");
                return None;
            }
            match record.into_station() {
                Ok(station) => Some(station),
                Err(e) => {
                    warn!(id, error = %e, "skipping station with invalid position");
                    None
                }
            }
        })
        .collect()
}
