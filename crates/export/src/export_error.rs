//! Typed errors for export operations.

use std::fmt;

/// Errors that can abort an export run.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error while writing an artifact.
    Io(std::io::Error),
    /// No committed roster to describe; export needs a generated map.
    NoRoster,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {e}"),
            ExportError::NoRoster => write!(f, "no roster committed; generate a map first"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::NoRoster => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}
