//! Error types for security header configuration

use thiserror::Error;

/// Result type for security header operations
pub type SecurityResult<T> = Result<T, SecurityError>;

/// Security header errors
///
/// Writing headers never fails; these errors come from configuring writers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecurityError {
    /// A required argument was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A policy string did not match any known value
    #[error("Unknown policy value: {0:?}")]
    UnknownPolicy(String),

    /// Configuration could not be read or parsed
    #[error("Security configuration error: {0}")]
    Config(String),
}

impl SecurityError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unknown_policy<S: Into<String>>(value: S) -> Self {
        Self::UnknownPolicy(value.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from a bad configuration value
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::UnknownPolicy(_) | Self::Config(_))
    }
}
