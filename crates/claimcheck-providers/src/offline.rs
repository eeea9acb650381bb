use claimcheck_domain::model::{EncyclopediaPage, FactCheckRecord};
use claimcheck_domain::{EncyclopediaSource, FactCheckSource, SourceError};

/// Fact-check source that never finds anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineFactChecks;

impl FactCheckSource for OfflineFactChecks {
    fn search_claims(&self, _query: &str) -> Result<Vec<FactCheckRecord>, SourceError> {
        Ok(Vec::new())
    }
}

/// Encyclopedia with no pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineEncyclopedia;

impl EncyclopediaSource for OfflineEncyclopedia {
    fn search(&self, _text: &str, _limit: usize) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }

    fn open_page(&self, title: &str) -> Result<EncyclopediaPage, SourceError> {
        Err(SourceError::NotFound(title.to_string()))
    }
}
