//! Fuzz target for provider response decoding.
//!
//! Goal: fact-check and encyclopedia JSON decoding **never panics** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_provider_json
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = claimcheck_providers::fuzz::parse_claim_search(text);
        let _ = claimcheck_providers::fuzz::parse_encyclopedia(text);
    }
});
