//! Error types for geonear.

use thiserror::Error;

/// Errors returned by the index, the query engine and the record store.
#[derive(Debug, Error)]
pub enum GeoNearError {
    /// Malformed coordinate, negative or non-finite radius
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// No indexed record carries the external ID
    #[error("no record found for external id {0}")]
    NotFound(i64),
    /// I/O error while reading a record source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Record source is not a usable GeoJSON feature collection
    #[error("invalid data format: {0}")]
    InvalidFormat(String),
    /// Configuration could not be parsed or failed validation
    #[error("configuration error: {0}")]
    Config(String),
}

impl GeoNearError {
    /// Whether the caller supplied something the core rejects, as opposed to
    /// a failure of the process itself.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NotFound(_))
    }
}

/// Result type alias for geonear operations
pub type Result<T> = std::result::Result<T, GeoNearError>;
