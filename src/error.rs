//! Error types for game_catalog

use std::fmt;

/// Unified error type for catalog loading
#[derive(Debug)]
pub enum CatalogError {
    /// Feed file could not be read
    Io(std::io::Error),
    /// Feed document is not valid JSON
    Parse(serde_json::Error),
    /// Feed document parsed but has the wrong top-level shape
    InvalidFeed(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "I/O error: {}", e),
            CatalogError::Parse(e) => write!(f, "Parse error: {}", e),
            CatalogError::InvalidFeed(msg) => write!(f, "Invalid feed: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Parse(e) => Some(e),
            CatalogError::InvalidFeed(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
