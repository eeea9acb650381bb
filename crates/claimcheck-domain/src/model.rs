use claimcheck_types::{Category, EvidenceItem};

/// Free-text statement submitted for verification.
///
/// The original casing is kept for display and correction; matching always runs against
/// the lower-cased form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    text: String,
    lowered: String,
}

impl Claim {
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_string();
        let lowered = text.to_lowercase();
        Self { text, lowered }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn mentions(&self, phrase: &str) -> bool {
        self.lowered.contains(phrase)
    }

    pub fn mentions_any<S: AsRef<str>>(&self, phrases: &[S]) -> bool {
        phrases.iter().any(|p| self.mentions(p.as_ref()))
    }
}

/// Curated fact with trigger phrases and an authoritative answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub id: String,
    /// Lower-cased substrings; any one of them selects this entry.
    pub triggers: Vec<String>,
    pub answer: String,
    pub sources: Vec<EvidenceItem>,
}

/// Knowledge entries in declaration order. Matching is first-match, not best-match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    pub entries: Vec<KnowledgeEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedEntity {
    /// Lower-cased canonical name.
    pub entity: String,
    pub rank: u32,
}

/// Canonical ranking for one category, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingTable {
    pub category: Category,
    pub entries: Vec<RankedEntity>,
}

impl RankingTable {
    pub fn rank_of(&self, entity: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.entity == entity)
            .map(|e| e.rank)
    }

    /// First entity (in declaration order) mentioned anywhere in the claim.
    pub fn first_mentioned(&self, claim: &Claim) -> Option<&RankedEntity> {
        self.entries.iter().find(|e| claim.mentions(&e.entity))
    }
}

/// One claim record returned by a fact-check provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactCheckRecord {
    pub text: Option<String>,
    pub reviews: Vec<ClaimReview>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimReview {
    pub publisher: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub textual_rating: Option<String>,
}

/// A resolved encyclopedia page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncyclopediaPage {
    pub title: String,
    pub url: String,
    pub summary: String,
}
