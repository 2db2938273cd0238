//! Content domain: error types for catalog lookup and data loading.

use std::path::PathBuf;

/// Catalog lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkyError {
    /// A type identifier absent from the catalog.
    #[error("unknown event type '{id}'")]
    UnknownType { id: String },
}

/// Failure to read or parse a RON data file.
#[derive(Debug, thiserror::Error)]
pub enum ContentLoadError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {message}")]
    Parse { file: PathBuf, message: String },
}

impl ContentLoadError {
    /// True when the file simply does not exist (built-in defaults apply).
    pub fn is_missing(&self) -> bool {
        matches!(self, ContentLoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
