//! Redacting line-format tracing layer.
//!
//! Renders each event as a single text line and passes the rendered
//! message through the redaction engine before it reaches the writer. The
//! event itself is never mutated; only the emitted line differs.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Utc;
use pd_redact::Redactor;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Tag prefixing every emitted log line.
pub const LOG_TAG: &str = "PDSAFE";

/// Timestamp format for emitted lines (UTC, millisecond precision).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A visitor that extracts the rendered message from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}

/// Line-format tracing layer that redacts PII before writing.
///
/// Output shape: `[PDSAFE] <target> <LEVEL> <timestamp>: <message>`.
pub struct RedactingLineLayer<W = io::Stderr> {
    writer: Mutex<W>,
    redactor: Redactor,
}

impl RedactingLineLayer<io::Stderr> {
    /// Create a layer writing to stderr.
    pub fn stderr(redactor: Redactor) -> Self {
        RedactingLineLayer {
            writer: Mutex::new(io::stderr()),
            redactor,
        }
    }
}

impl<W: Write> RedactingLineLayer<W> {
    /// Create a layer with a custom writer.
    pub fn new(writer: W, redactor: Redactor) -> Self {
        RedactingLineLayer {
            writer: Mutex::new(writer),
            redactor,
        }
    }
}

impl<S, W> Layer<S> for RedactingLineLayer<W>
where
    S: Subscriber,
    W: Write + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.message.unwrap_or_default();
        let redacted = self.redactor.redact(&message);

        let meta = event.metadata();
        let timestamp = Utc::now().format(TIMESTAMP_FORMAT);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(
                writer,
                "[{}] {} {} {}: {}",
                LOG_TAG,
                meta.target(),
                meta.level(),
                timestamp,
                redacted
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_redact::RedactionPolicy;
    use std::sync::Arc;
    use tracing_subscriber::layer::SubscriberExt;

    /// Writer handing captured output back to the test.
    #[derive(Clone, Default)]
    struct SharedWriter(Arc<Mutex<Vec<u8>>>);

    impl SharedWriter {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture<F: FnOnce()>(emit: F) -> String {
        let writer = SharedWriter::default();
        let layer = RedactingLineLayer::new(
            writer.clone(),
            Redactor::new(RedactionPolicy::default()),
        );
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, emit);
        writer.contents()
    }

    #[test]
    fn test_line_shape() {
        let output = capture(|| {
            tracing::info!(target: "user_data", "name=Bob; role=admin;");
        });

        let pattern = regex::Regex::new(
            r"^\[PDSAFE\] user_data INFO \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}: name=\*\*\*; role=admin;\n$",
        )
        .unwrap();
        assert!(pattern.is_match(&output), "unexpected line: {}", output);
    }

    #[test]
    fn test_message_redacted_before_sink() {
        let output = capture(|| {
            tracing::info!(target: "user_data", "email=bob@example.com; password=hunter2; ip=1.2.3.4;");
        });

        assert!(!output.contains("bob@example.com"));
        assert!(!output.contains("hunter2"));
        assert!(output.contains("email=***;"));
        assert!(output.contains("password=***;"));
        assert!(output.contains("ip=1.2.3.4;"));
    }

    #[test]
    fn test_level_rendered_uppercase() {
        let output = capture(|| {
            tracing::warn!(target: "user_data", "name=Bob;");
        });
        assert!(output.contains(" WARN "));
    }

    #[test]
    fn test_one_line_per_event() {
        let output = capture(|| {
            tracing::info!(target: "user_data", "name=A;");
            tracing::info!(target: "user_data", "name=B;");
        });
        assert_eq!(output.lines().count(), 2);
    }
}
