//! Contracts for the external evidence providers.
//!
//! Implementations live in `claimcheck-providers`; the domain only names the seam.

use crate::model::{EncyclopediaPage, FactCheckRecord};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network failure, timeout, or non-2xx response.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The title resolves to a disambiguation page.
    #[error("ambiguous reference: {0}")]
    Ambiguous(String),

    #[error("page not found: {0}")]
    NotFound(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl SourceError {
    /// Candidate-level errors the resolver skips past without logging a failure.
    pub fn is_candidate_miss(&self) -> bool {
        matches!(self, SourceError::Ambiguous(_) | SourceError::NotFound(_))
    }
}

/// Fact-check search keyed by claim text.
pub trait FactCheckSource: Send + Sync {
    fn search_claims(&self, query: &str) -> Result<Vec<FactCheckRecord>, SourceError>;
}

/// Encyclopedia search and page lookup.
pub trait EncyclopediaSource: Send + Sync {
    /// Candidate page titles in the provider's relevance order.
    fn search(&self, text: &str, limit: usize) -> Result<Vec<String>, SourceError>;

    fn open_page(&self, title: &str) -> Result<EncyclopediaPage, SourceError>;
}
