//! Evidence source adapters: Google Fact Check Tools and Wikipedia over blocking HTTP.
//!
//! This crate is allowed to do network IO. Response bodies are decoded by pure functions so
//! parsing can be tested (and fuzzed) without a network.

#![forbid(unsafe_code)]

mod google;
mod http;
mod offline;
mod wikipedia;

use claimcheck_domain::{EncyclopediaSource, FactCheckSource};
use claimcheck_settings::ProviderSettings;
use tracing::warn;

pub use google::{FactCheckToolsClient, parse_claim_search};
pub use http::build_client;
pub use offline::{OfflineEncyclopedia, OfflineFactChecks};
pub use wikipedia::{WikipediaClient, parse_page_summary, parse_search_titles};

/// Sources selected for one run.
pub struct Sources {
    pub fact_check: Box<dyn FactCheckSource>,
    pub encyclopedia: Box<dyn EncyclopediaSource>,
}

/// Build the sources named by `settings`. Disabled sources, and a fact-check source without
/// an API key, are replaced by offline sources that return nothing.
pub fn build_sources(settings: &ProviderSettings) -> anyhow::Result<Sources> {
    let needs_http = settings.fact_check.is_some() || settings.encyclopedia.is_some();
    let client = if needs_http {
        Some(build_client(settings.timeout, &settings.user_agent)?)
    } else {
        None
    };

    let fact_check: Box<dyn FactCheckSource> = match (&settings.fact_check, &client) {
        (Some(fc), Some(client)) => match fc.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => Box::new(FactCheckToolsClient::new(
                client.clone(),
                &fc.endpoint,
                key,
                &fc.language,
            )),
            None => {
                warn!(
                    api_key_env = %fc.api_key_env,
                    "fact-check API key not set; continuing without fact-check search"
                );
                Box::new(OfflineFactChecks)
            }
        },
        _ => Box::new(OfflineFactChecks),
    };

    let encyclopedia: Box<dyn EncyclopediaSource> = match (&settings.encyclopedia, &client) {
        (Some(enc), Some(client)) => Box::new(WikipediaClient::new(
            client.clone(),
            &enc.api_endpoint,
            &enc.rest_endpoint,
        )),
        _ => Box::new(OfflineEncyclopedia),
    };

    Ok(Sources {
        fact_check,
        encyclopedia,
    })
}

/// Fuzz-friendly entry points. These never panic on any input.
pub mod fuzz {
    /// Decode arbitrary text as a fact-check claim search response.
    pub fn parse_claim_search(text: &str) -> usize {
        super::parse_claim_search(text).map_or(0, |records| records.len())
    }

    /// Decode arbitrary text as encyclopedia search and summary responses.
    pub fn parse_encyclopedia(text: &str) -> usize {
        let titles = super::parse_search_titles(text).map_or(0, |t| t.len());
        let summary = super::parse_page_summary("Fuzz", text).map_or(0, |p| p.summary.len());
        titles + summary
    }
}
