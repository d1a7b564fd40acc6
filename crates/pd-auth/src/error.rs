//! Error types for credential hashing.

use thiserror::Error;

/// Result type for credential operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur hashing or verifying credentials.
///
/// Any error here is an input or configuration bug, not a security event;
/// callers treat every non-true verification outcome as "does not match".
#[derive(Error, Debug)]
pub enum AuthError {
    /// Hash input is not a well-formed bcrypt encoding.
    #[error("invalid credential hash: {0}")]
    InvalidHash(String),

    /// Requested work factor outside the supported range.
    #[error("work factor {0} outside supported range")]
    InvalidCost(u32),

    /// Underlying bcrypt failure.
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}
