//! Redaction policy configuration.
//!
//! A policy names the fields whose values are replaced, the replacement
//! token, and the segment separator. It is configured once and lives for
//! the process.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Field names treated as personally identifiable by default.
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Replacement token applied to matched field values.
pub const DEFAULT_REDACTION: &str = "***";

/// Character separating `key=value` segments in a message.
pub const DEFAULT_SEPARATOR: char = ';';

/// Redaction policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionPolicy {
    /// Field names whose values are replaced, in configuration order.
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,

    /// Replacement token.
    #[serde(default = "default_redaction")]
    pub redaction: String,

    /// Segment separator.
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_fields() -> Vec<String> {
    PII_FIELDS.iter().map(|f| (*f).to_string()).collect()
}

fn default_redaction() -> String {
    DEFAULT_REDACTION.to_string()
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl RedactionPolicy {
    /// Create a policy with the standard PII field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a policy redacting the given fields with the default token
    /// and separator.
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Load a policy from a JSON file.
    ///
    /// Omitted keys take their defaults, so a file containing `{}` yields
    /// the default policy.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let policy: RedactionPolicy = serde_json::from_str(&content)?;
        Ok(policy)
    }

    /// Save a policy to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            redaction: default_redaction(),
            separator: default_separator(),
        }
    }
}
