use crate::Verdict;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One citation supporting or contextualizing a verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceItem {
    pub source: String,
    pub url: String,
    pub snippet: String,

    /// Lower-cased free text (`true`, `mostly false`, `reference`, `corrected`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,

    /// Text of the fact-checked claim this item reviews, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_text: Option<String>,
}

impl EvidenceItem {
    /// Curated citation without a rating.
    pub fn cited(source: &str, url: &str, snippet: &str) -> Self {
        Self {
            source: source.to_string(),
            url: url.to_string(),
            snippet: snippet.to_string(),
            rating: None,
            claim_text: None,
        }
    }

    pub fn with_rating(mut self, rating: &str) -> Self {
        self.rating = Some(rating.to_lowercase());
        self
    }

    pub fn rating(&self) -> &str {
        self.rating.as_deref().unwrap_or("")
    }
}

/// Outcome of verifying one claim.
///
/// Evidence is in append order: curated/ranking sources first, fact-check results next,
/// encyclopedia references last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictResult {
    pub verdict: Verdict,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_statement: Option<String>,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
}
