//! Crate-level error type

/// Crate result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for configuration loading and CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be read, parsed, or validated
    #[error("Config error: {0}")]
    ConfigError(String),
}
