//! Error types for the itinerary exporter

use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or exporting the itinerary
#[derive(Error, Debug)]
pub enum Error {
    /// A required external capability (capture or document encoding) is not present
    #[error("Export dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// Capturing the rendered region failed or produced no usable buffer
    #[error("Capture failed: {0}")]
    Capture(String),

    /// Assembling or serializing the output document failed
    #[error("Document encoding failed: {0}")]
    Encode(String),

    /// A second export was triggered while one is still running
    #[error("An export is already in progress")]
    ExportInProgress,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error while persisting the document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
