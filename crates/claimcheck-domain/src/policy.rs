use crate::model::{KnowledgeBase, RankingTable};
use claimcheck_types::{EvidenceItem, StageId};

/// One ranking category: the keywords that select it, its table, and the citation
/// attached when a claim in this category is corrected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRule {
    pub keywords: Vec<String>,
    pub table: RankingTable,
    pub correction_source: EvidenceItem,
}

/// Keyword families scanned in fact-check ratings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingFamilies {
    pub true_family: Vec<String>,
    pub false_family: Vec<String>,
    pub mixed_family: Vec<String>,
}

/// Indicator words scanned in encyclopedia summaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorWords {
    pub false_words: Vec<String>,
    pub true_words: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceLimits {
    /// Candidate titles requested when resolving the fallback page.
    pub search_results: usize,
    /// Supplementary references after a knowledge-base or ranking decision.
    pub after_static: usize,
    /// Supplementary references after a fact-check or fallback decision.
    pub after_dynamic: usize,
    /// Summary characters kept in a reference snippet.
    pub snippet_chars: usize,
}

impl ReferenceLimits {
    pub fn supplementary_for(&self, stage: StageId) -> usize {
        match stage {
            StageId::KnowledgeBase | StageId::RankingCheck => self.after_static,
            StageId::FactCheck | StageId::EncyclopediaFallback => self.after_dynamic,
        }
    }
}

/// Immutable tables the engine consults. Built once (see `claimcheck-settings`) and passed
/// by reference; nothing in the engine mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub profile: String,
    pub knowledge_base: KnowledgeBase,
    /// Ranking categories in priority order. Only the first category whose keywords match
    /// is considered for a claim.
    pub rankings: Vec<CategoryRule>,
    pub rating_families: RatingFamilies,
    pub indicators: IndicatorWords,
    pub references: ReferenceLimits,
}
