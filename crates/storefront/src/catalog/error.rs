//! Errors raised while fetching and reading the catalog document.

use std::path::PathBuf;
use std::sync::Arc;

use showroom_core::LookupError;
use thiserror::Error;

/// Fetching or decoding the raw document failed.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the document from disk failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body is not valid JSON, or a section does not match its model.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("Catalog document must be a JSON object")]
    NotAnObject,

    /// The fetch task ended without producing a document.
    #[error("Catalog fetch was interrupted")]
    Interrupted,

    /// The configured location is neither a URL nor a usable path.
    #[error("Invalid data source {0:?}")]
    InvalidLocation(String),
}

/// Catalog store error.
///
/// Cloneable so that a failed load can be cached and handed to every caller.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The document could not be loaded.
    #[error("Failed to load catalog: {0}")]
    LoadFailed(Arc<SourceError>),

    /// A requested top-level section is absent or `null`.
    #[error("Section \"{0}\" not found in data")]
    SectionNotFound(String),

    /// A section exists but does not have the requested shape.
    #[error("Section \"{section}\" is invalid: {message}")]
    InvalidSection { section: String, message: String },

    /// A lookup inside the loaded document failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl From<SourceError> for CatalogError {
    fn from(err: SourceError) -> Self {
        Self::LoadFailed(Arc::new(err))
    }
}

impl CatalogError {
    /// Whether this error means the requested entity or section does not
    /// exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SectionNotFound(_) | Self::Lookup(LookupError::NotFound { .. })
        )
    }
}
