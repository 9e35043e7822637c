//! Catalog error types.

use snapbuy_commerce::ProductId;

/// Error type for catalog lookups.
///
/// Providers surface failures unchanged; retrying and messaging are the
/// caller's job.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid catalog record {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

impl CatalogError {
    /// Whether a caller could reasonably retry the same request.
    pub fn is_transient(&self) -> bool {
        match self {
            CatalogError::Http { status, .. } => *status >= 500 || *status == 429,
            CatalogError::Connection(_) => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Deserialization(e.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e.to_string())
    }
}
