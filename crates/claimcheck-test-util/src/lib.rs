//! Shared test utilities for the claimcheck workspace.
//!
//! Lives outside `#[cfg(test)]` because the app and CLI test suites both need the fake
//! sources and `xtask` needs `normalize_nondeterministic`.

use claimcheck_domain::model::{ClaimReview, EncyclopediaPage, FactCheckRecord};
use claimcheck_domain::{EncyclopediaSource, FactCheckSource, SourceError};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Normalize non-deterministic report fields for golden comparison.
///
/// `tool.version` is replaced only on the root envelope (`schema`, `tool`, `run`, `claim`,
/// `result` all present). `started_at`, `finished_at` and `duration_ms` are replaced at any
/// depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "run", "claim", "result"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool.contains_key("version")
        {
            tool.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_run_recursive(&mut value);
    value
}

fn normalize_run_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_run_recursive(val);
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(normalize_run_recursive),
        _ => {}
    }
}

/// One fact-check record with a single review.
pub fn rated_record(claim: &str, publisher: &str, rating: &str) -> FactCheckRecord {
    FactCheckRecord {
        text: Some(claim.to_string()),
        reviews: vec![ClaimReview {
            publisher: Some(publisher.to_string()),
            url: Some(format!(
                "https://{}.example/review",
                publisher.to_lowercase().replace(' ', "-")
            )),
            title: Some(format!("{publisher} review")),
            textual_rating: Some(rating.to_string()),
        }],
    }
}

/// Fact-check source returning the same records for every query, counting calls.
#[derive(Debug, Default)]
pub struct StaticFactChecks {
    records: Vec<FactCheckRecord>,
    calls: AtomicUsize,
}

impl StaticFactChecks {
    pub fn new(records: Vec<FactCheckRecord>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FactCheckSource for StaticFactChecks {
    fn search_claims(&self, _query: &str) -> Result<Vec<FactCheckRecord>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// In-memory encyclopedia. Every search returns `titles` (capped by the limit); titles
/// without a page are not found, titles marked ambiguous are disambiguation pages.
#[derive(Debug, Default)]
pub struct StaticEncyclopedia {
    titles: Vec<String>,
    pages: BTreeMap<String, EncyclopediaPage>,
    ambiguous: BTreeSet<String>,
    searches: AtomicUsize,
}

impl StaticEncyclopedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resolvable page; its title is appended to the search results.
    pub fn page(mut self, title: &str, summary: &str) -> Self {
        self.titles.push(title.to_string());
        self.pages.insert(
            title.to_string(),
            EncyclopediaPage {
                title: title.to_string(),
                url: format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")),
                summary: summary.to_string(),
            },
        );
        self
    }

    /// Add a search result that resolves to a disambiguation page.
    pub fn ambiguous(mut self, title: &str) -> Self {
        self.titles.push(title.to_string());
        self.ambiguous.insert(title.to_string());
        self
    }

    /// Add a search result with no page behind it.
    pub fn missing(mut self, title: &str) -> Self {
        self.titles.push(title.to_string());
        self
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

impl EncyclopediaSource for StaticEncyclopedia {
    fn search(&self, _text: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        Ok(self.titles.iter().take(limit).cloned().collect())
    }

    fn open_page(&self, title: &str) -> Result<EncyclopediaPage, SourceError> {
        if self.ambiguous.contains(title) {
            return Err(SourceError::Ambiguous(title.to_string()));
        }
        self.pages
            .get(title)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(title.to_string()))
    }
}

/// Source whose every call fails as if the network were down.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingSource;

impl FactCheckSource for FailingSource {
    fn search_claims(&self, _query: &str) -> Result<Vec<FactCheckRecord>, SourceError> {
        Err(SourceError::Unavailable("connection refused".to_string()))
    }
}

impl EncyclopediaSource for FailingSource {
    fn search(&self, _text: &str, _limit: usize) -> Result<Vec<String>, SourceError> {
        Err(SourceError::Unavailable("connection refused".to_string()))
    }

    fn open_page(&self, _title: &str) -> Result<EncyclopediaPage, SourceError> {
        Err(SourceError::Unavailable("connection refused".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_version_and_run_are_normalized() {
        let report = json!({
            "schema": "claimcheck.report.v1",
            "tool": { "name": "claimcheck", "version": "0.1.0" },
            "run": { "started_at": "2026-01-01T00:00:00Z", "finished_at": "2026-01-01T00:00:01Z", "duration_ms": 1000 },
            "claim": "x",
            "result": { "verdict": "Unverified" }
        });
        let out = normalize_nondeterministic(report);
        assert_eq!(out["tool"]["version"], "__VERSION__");
        assert_eq!(out["run"]["started_at"], "__TIMESTAMP__");
        assert_eq!(out["run"]["finished_at"], "__TIMESTAMP__");
        assert_eq!(out["run"]["duration_ms"], 0);
    }

    #[test]
    fn non_envelope_tool_version_is_kept() {
        let value = json!({ "tool": { "name": "x", "version": "1.2.3" } });
        let out = normalize_nondeterministic(value);
        assert_eq!(out["tool"]["version"], "1.2.3");
    }

    #[test]
    fn static_encyclopedia_distinguishes_misses() {
        let enc = StaticEncyclopedia::new()
            .ambiguous("Mercury")
            .missing("Gone")
            .page("Moon", "Rock.");
        assert_eq!(enc.search("q", 2).expect("search"), vec!["Mercury", "Gone"]);
        assert!(matches!(enc.open_page("Mercury"), Err(SourceError::Ambiguous(_))));
        assert!(matches!(enc.open_page("Gone"), Err(SourceError::NotFound(_))));
        assert_eq!(enc.open_page("Moon").expect("page").summary, "Rock.");
        assert_eq!(enc.searches(), 1);
    }
}
