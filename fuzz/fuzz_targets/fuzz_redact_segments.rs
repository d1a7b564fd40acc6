//! Fuzz target for the redaction tokenizer.
//!
//! Checks the structural invariants on arbitrary input: redaction never
//! panics and, whenever the token cannot itself introduce separators,
//! preserves the segment count and is idempotent.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_redact::redact_segments;

fuzz_target!(|input: (Vec<String>, String, String, char)| {
    let (fields, redaction, message, separator) = input;

    let once = redact_segments(&fields, &redaction, &message, separator);

    if !redaction.contains(separator) {
        assert_eq!(
            message.split(separator).count(),
            once.split(separator).count()
        );

        let twice = redact_segments(&fields, &redaction, &once, separator);
        assert_eq!(once, twice);
    }
});
