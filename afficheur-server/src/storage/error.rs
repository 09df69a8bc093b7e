//! Storage error types.

/// Errors from the schedule store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading the data directory or a board file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A board file is not valid JSON
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// No data is available for the requested station
    #[error("no schedule data for station {station}")]
    UnknownStation { station: String },
}
