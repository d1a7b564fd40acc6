//! Audit dump pipeline: redacted user-row logging.
//!
//! This crate wires the redaction engine into a logging pipeline and drives
//! it from a relational data source:
//!
//! - **Redacting log layer**: a `tracing` layer that rewrites PII fields in
//!   every rendered message before the line reaches stderr.
//! - **Row pipeline**: a single linear pass over the users table, one
//!   redacted log line per row, connection released unconditionally.
//! - **CLI**: `dump`, `hash`, and `verify` subcommands with stable exit
//!   codes.
//!
//! The hasher and the redactor never interact; they only share the binary.

pub mod db;
pub mod error;
pub mod exit_codes;
pub mod logging;

pub use error::{AuditError, Result};
pub use exit_codes::ExitCode;
