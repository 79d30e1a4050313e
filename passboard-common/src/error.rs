//! Common error types for passboard

use thiserror::Error;

/// Common result type for passboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the data layer and configuration loading
///
/// Every error aborts only the single requested operation; the store stays
/// usable for subsequent requests.
#[derive(Error, Debug)]
pub enum Error {
    /// Referenced pass or position does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or out-of-range input, rejected before any mutation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file present but not valid TOML
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Shorthand for a validation failure on a named field
    pub fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        Error::Validation(format!("{field}: {reason}"))
    }
}
