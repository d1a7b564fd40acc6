//! Error types for the audit pipeline.

use thiserror::Error;

/// Result type for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors that abort an audit run.
///
/// There is no retry logic: the first failure unwinds the run after the
/// connection pool is released.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Environment configuration is incomplete.
    #[error("config error: {0}")]
    Config(#[from] pd_config::ConfigError),

    /// Redaction policy file could not be loaded.
    #[error("policy error: {0}")]
    Policy(#[from] pd_redact::RedactError),

    /// Credential hashing or verification failed.
    #[error("auth error: {0}")]
    Auth(#[from] pd_auth::AuthError),

    /// Database connection or query failure.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}
