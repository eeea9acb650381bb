//! Fuzz target for the static stages.
//!
//! Goal: knowledge base matching, ranking verification and ordinal correction **never panic**
//! on any claim text, and a correction always verifies as correct.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_ranking_verifier
//! ```

#![no_main]

use claimcheck_domain::Claim;
use claimcheck_domain::stages::{knowledge_base, ranking};
use libfuzzer_sys::fuzz_target;
use std::sync::LazyLock;

static CONFIG: LazyLock<Option<claimcheck_domain::EngineConfig>> =
    LazyLock::new(|| claimcheck_settings::preset("standard").map(|c| c.engine));

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Some(config) = CONFIG.as_ref() else {
        return;
    };
    let claim = Claim::new(text);

    let _ = knowledge_base::decide(&claim, &config.knowledge_base);

    if let Some(check) = ranking::verify(&claim, &config.rankings)
        && let Some(corrected) = check.corrected_text
    {
        let corrected = Claim::new(&corrected);
        let again = ranking::verify(&corrected, &config.rankings);
        assert!(again.is_some_and(|c| c.is_correct), "correction did not verify: {text:?}");
    }
});
