//! Exit codes for the pd-audit CLI.
//!
//! Scripts drive pd-audit by exit code rather than by parsing output.
//! The mapping below is a stable contract.

use crate::error::AuditError;

/// Exit codes for pd-audit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Clean run; for `verify`, the password matched.
    Success = 0,

    /// Runtime failure (database, hashing) or a failed `verify` check.
    RuntimeFailure = 1,

    /// Configuration error (environment, policy file).
    ConfigError = 2,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Success)
    }
}

impl From<&AuditError> for ExitCode {
    fn from(err: &AuditError) -> Self {
        match err {
            AuditError::Config(_) | AuditError::Policy(_) => ExitCode::ConfigError,
            AuditError::Auth(_) | AuditError::Db(_) => ExitCode::RuntimeFailure,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
