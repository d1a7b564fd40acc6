//! Error types for configuration resolution.

use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur resolving configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The database name has no fallback and must be set.
    #[error("database name not configured: set PERSONAL_DATA_DB_NAME")]
    MissingDatabaseName,
}
