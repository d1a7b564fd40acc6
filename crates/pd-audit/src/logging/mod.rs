//! Logging foundation for the audit pipeline.
//!
//! Every log line passes through the redaction engine before reaching the
//! sink, so PII never lands in an unredacted form:
//!
//! ```text
//! [PDSAFE] user_data INFO 2026-08-06 14:02:11.483: name=***; email=***; ip=17.2.3.4;
//! ```
//!
//! # Design Notes
//!
//! - stdout is reserved for command payloads (hashes, verify outcome)
//! - stderr receives all log output
//! - The redacting layer owns its [`Redactor`] instance; the caller
//!   constructs it and passes it in, there is no process-global redactor

pub mod config;
pub mod layer;

pub use config::{LogConfig, LogLevel, ENV_LOG};
pub use layer::{RedactingLineLayer, LOG_TAG};

use pd_redact::Redactor;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the logging subsystem.
///
/// Called once at startup, before the first event is emitted. The level
/// comes from the resolved [`LogConfig`]; the redactor is fixed for the
/// lifetime of the process.
pub fn init_logging(config: &LogConfig, redactor: Redactor) {
    let filter = EnvFilter::new(config.level.to_string());
    tracing_subscriber::registry()
        .with(filter)
        .with(RedactingLineLayer::stderr(redactor))
        .init();
}

/// Generate a unique run ID for this invocation.
pub fn generate_run_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("run-{}", &uuid.simple().to_string()[..12])
}
