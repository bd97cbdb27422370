//! Error types for identicon generation and the HTTP front end

use thiserror::Error;

/// Result type alias for identicon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or serving identicons
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A board or canvas dimension that cannot be addressed
    #[error("Invalid dimension: {name} must be a positive integer, got {value}")]
    InvalidDimension { name: &'static str, value: u64 },

    /// Invalid server configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to bind or to answer a request
    #[error("Server error: {0}")]
    ServerError(String),
}

impl Error {
    pub(crate) fn invalid_dimension(name: &'static str, value: impl Into<u64>) -> Self {
        Error::InvalidDimension {
            name,
            value: value.into(),
        }
    }
}
