//! Theme error types

use thiserror::Error;

/// Theme configuration and initialization errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A required theme key was not provided
    #[error("theme is missing required field `{0}`")]
    MissingField(&'static str),

    /// A theme key was provided with an unusable value
    #[error("theme field `{field}` is invalid: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// The theme source could not be parsed
    #[error("failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    /// The process-wide theme state was already installed
    #[error("theme state already initialized")]
    AlreadyInitialized,
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
