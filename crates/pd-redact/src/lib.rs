//! Field-level PII redaction for log messages.
//!
//! This crate provides a single, reusable redaction engine that rewrites
//! `key=value` segments in a log line before the line reaches a sink.
//!
//! # Key Features
//!
//! - **Literal field matching**: sensitive fields are named explicitly and
//!   compared exactly; a field name is never interpreted as a pattern.
//! - **Order-preserving**: the output carries the same segments in the same
//!   order as the input, with only the values of listed fields replaced.
//! - **Single pass**: every segment is inspected exactly once, so redacted
//!   output cannot be re-matched by a later field in the list.
//! - **Idempotent**: redacting already-redacted output is the identity.
//!
//! # Example
//!
//! ```
//! use pd_redact::{RedactionPolicy, Redactor};
//!
//! let redactor = Redactor::new(RedactionPolicy::default());
//! let line = redactor.redact("name=Bob;email=bob@example.com;role=admin;");
//! assert_eq!(line, "name=***;email=***;role=admin;");
//! ```

pub mod engine;
pub mod error;
pub mod policy;

pub use engine::{redact_segments, Redactor};
pub use error::{RedactError, Result};
pub use policy::{RedactionPolicy, DEFAULT_REDACTION, DEFAULT_SEPARATOR, PII_FIELDS};
