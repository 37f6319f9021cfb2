//! Configuration loading errors.

use thiserror::Error;

use crate::error::PathError;

/// Config load error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// File parsed but a value is out of range
    #[error("{0}")]
    Invalid(#[from] PathError),
}
