//! Tokenizing redaction engine.
//!
//! The engine walks `key=value` segments split on the configured separator
//! and replaces the value of every listed field with the redaction token.
//! Keys are compared exactly (ignoring surrounding whitespace), so a field
//! name is never interpreted as a pattern and a key that merely contains a
//! listed name as a substring does not match.

use crate::policy::RedactionPolicy;

/// Redact the values of `fields` inside `message`.
///
/// `message` is treated as `key=value` segments joined by `separator`. For
/// each segment whose key is listed in `fields`, everything after the first
/// `=` is replaced with `redaction`. Segments without a `=` and segments
/// with unlisted keys pass through unchanged, so the output preserves the
/// input's segment order and count.
///
/// With an empty field list this is the identity transform.
pub fn redact_segments(
    fields: &[String],
    redaction: &str,
    message: &str,
    separator: char,
) -> String {
    if fields.is_empty() {
        return message.to_string();
    }

    let segments: Vec<String> = message
        .split(separator)
        .map(|segment| match segment.split_once('=') {
            Some((key, _)) if fields.iter().any(|f| f == key.trim()) => {
                format!("{}={}", key, redaction)
            }
            _ => segment.to_string(),
        })
        .collect();

    segments.join(&separator.to_string())
}

/// A configured redactor.
///
/// Holds the field set, redaction token, and separator for the lifetime of
/// the process. Construction is the only configuration point; every call to
/// [`Redactor::redact`] applies the same policy.
#[derive(Debug, Clone)]
pub struct Redactor {
    policy: RedactionPolicy,
}

impl Redactor {
    /// Create a redactor applying the given policy.
    pub fn new(policy: RedactionPolicy) -> Self {
        Self { policy }
    }

    /// Redact a single message.
    pub fn redact(&self, message: &str) -> String {
        redact_segments(
            &self.policy.fields,
            &self.policy.redaction,
            message,
            self.policy.separator,
        )
    }

    /// Get a reference to the policy.
    pub fn policy(&self) -> &RedactionPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_redact_single_field() {
        let out = redact_segments(
            &fields(&["password"]),
            "***",
            "name=Bob;password=secret;",
            ';',
        );
        assert_eq!(out, "name=Bob;password=***;");
    }

    #[test]
    fn test_empty_field_list_is_identity() {
        let out = redact_segments(&[], "***", "name=Bob;", ';');
        assert_eq!(out, "name=Bob;");
    }

    #[test]
    fn test_absent_field_is_noop() {
        let out = redact_segments(&fields(&["ssn"]), "***", "name=Bob;role=admin;", ';');
        assert_eq!(out, "name=Bob;role=admin;");
    }

    #[test]
    fn test_unlisted_fields_untouched() {
        let out = redact_segments(
            &fields(&["email", "password"]),
            "xxx",
            "email=a@b.com;password=hunter2;ssn=111;",
            ';',
        );
        assert_eq!(out, "email=xxx;password=xxx;ssn=111;");
    }

    #[test]
    fn test_multiple_occurrences_all_redacted() {
        let out = redact_segments(
            &fields(&["email"]),
            "***",
            "email=a@b.com;name=Bob;email=c@d.com;",
            ';',
        );
        assert_eq!(out, "email=***;name=Bob;email=***;");
    }

    #[test]
    fn test_value_containing_equals() {
        // Everything after the first `=` is the value.
        let out = redact_segments(&fields(&["password"]), "***", "password=a=b=c;", ';');
        assert_eq!(out, "password=***;");
    }

    #[test]
    fn test_substring_key_does_not_match() {
        // Exact comparison: "username" is not "name".
        let out = redact_segments(&fields(&["name"]), "***", "username=dave;name=Bob;", ';');
        assert_eq!(out, "username=dave;name=***;");
    }

    #[test]
    fn test_segment_without_equals_passes_through() {
        let out = redact_segments(&fields(&["name"]), "***", "plain text;name=Bob;", ';');
        assert_eq!(out, "plain text;name=***;");
    }

    #[test]
    fn test_whitespace_around_key_preserved() {
        // Keys are trimmed for comparison but the segment spacing survives.
        let out = redact_segments(
            &fields(&["name", "email"]),
            "***",
            "name=Bob; email=a@b.com;",
            ';',
        );
        assert_eq!(out, "name=***; email=***;");
    }

    #[test]
    fn test_custom_separator() {
        let out = redact_segments(&fields(&["ssn"]), "***", "ssn=111|name=Bob|", '|');
        assert_eq!(out, "ssn=***|name=Bob|");
    }

    #[test]
    fn test_unterminated_final_segment_redacted() {
        let out = redact_segments(&fields(&["password"]), "***", "name=Bob;password=secret", ';');
        assert_eq!(out, "name=Bob;password=***");
    }

    #[test]
    fn test_redactor_applies_policy() {
        let redactor = Redactor::new(RedactionPolicy::default());
        let out = redactor.redact("name=Marlene;email=m@x.com;role=admin;");
        assert_eq!(out, "name=***;email=***;role=admin;");
    }

    #[test]
    fn test_redaction_idempotent() {
        let redactor = Redactor::new(RedactionPolicy::default());
        let once = redactor.redact("name=Bob;ssn=111-22-3333;role=admin;");
        let twice = redactor.redact(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_message() {
        let redactor = Redactor::new(RedactionPolicy::default());
        assert_eq!(redactor.redact(""), "");
    }
}
