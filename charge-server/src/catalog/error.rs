//! Station catalog error types.

use std::path::PathBuf;

/// Errors that can occur when loading the station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a JSON array of station records
    #[error("JSON parse error in catalog {path:?}: {message}")]
    Json { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::Json {
            path: PathBuf::from("data/stations.json"),
            message: "expected value at line 1 column 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error in catalog \"data/stations.json\": expected value at line 1 column 1"
        );

        let err = CatalogError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("failed to read catalog"));
    }
}
