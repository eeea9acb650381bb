use crate::model::{Claim, KnowledgeBase, KnowledgeEntry};
use crate::report::Decision;
use claimcheck_types::{StageId, Verdict};

pub const EXPLANATION: &str = "This information is verified by reliable sources.";

/// First entry (declaration order) with any trigger phrase contained in the claim.
pub fn match_entry<'a>(claim: &Claim, kb: &'a KnowledgeBase) -> Option<&'a KnowledgeEntry> {
    kb.entries.iter().find(|e| claim.mentions_any(&e.triggers))
}

pub fn decide(claim: &Claim, kb: &KnowledgeBase) -> Option<Decision> {
    let entry = match_entry(claim, kb)?;
    Some(Decision {
        stage: StageId::KnowledgeBase,
        verdict: Verdict::Verified,
        explanation: EXPLANATION.to_string(),
        corrected_statement: Some(entry.answer.clone()),
        evidence: entry.sources.clone(),
    })
}
