//! Fuzz target for redaction policy parsing.
//!
//! Arbitrary bytes must never panic the JSON policy loader; malformed
//! input only yields a parse error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_redact::RedactionPolicy;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<RedactionPolicy>(text);
    }
});
