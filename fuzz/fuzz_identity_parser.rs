//! Fuzz target for the JSON identity-document parser.
//!
//! Run with: cargo +nightly fuzz run fuzz_identity_parser
//!
//! This exercises `BuildIdentity::parse()` with arbitrary byte sequences to
//! find panics or hangs in the parsing and checking pipeline.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only valid UTF-8 can reach the parser; the result itself is
    // irrelevant, panics are what we are after.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = buildstamp_core::BuildIdentity::parse(s);
    }
});
