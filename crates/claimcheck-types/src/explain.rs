//! Explain registry for verdict labels.
//!
//! Maps each verdict to what it means and which pipeline stage can produce it.

use crate::{StageId, Verdict};

/// Explanation entry for a verdict label.
#[derive(Debug, Clone)]
pub struct VerdictExplanation {
    pub verdict: Verdict,
    /// What the label asserts about the claim.
    pub meaning: &'static str,
    /// Stages that can terminate with this label.
    pub produced_by: &'static [StageId],
    /// Whether a corrected statement accompanies the label.
    pub correction: &'static str,
}

/// Look up an explanation by verdict label (case-insensitive, `-`/`_` accepted for spaces).
pub fn lookup_explanation(label: &str) -> Option<VerdictExplanation> {
    Verdict::from_label(label).map(explain)
}

/// List all verdict labels, in decision priority order.
pub fn all_verdict_labels() -> Vec<&'static str> {
    Verdict::ALL.iter().map(|v| v.label()).collect()
}

fn explain(verdict: Verdict) -> VerdictExplanation {
    match verdict {
        Verdict::Verified => VerdictExplanation {
            verdict,
            meaning: "\
The claim mentions a topic covered by the curated knowledge base. The stored answer is \
authoritative and short-circuits every other stage.",
            produced_by: &[StageId::KnowledgeBase],
            correction: "The knowledge base answer.",
        },
        Verdict::True => VerdictExplanation {
            verdict,
            meaning: "\
Either the stated rank matches the canonical ranking table, or every fact-check rating \
found is in the true family (true, correct, accurate).",
            produced_by: &[StageId::RankingCheck, StageId::FactCheck],
            correction: "The original claim.",
        },
        Verdict::False => VerdictExplanation {
            verdict,
            meaning: "\
Either the stated rank differs from the canonical ranking table, or every fact-check rating \
found is in the false family (false, incorrect, inaccurate, fake).",
            produced_by: &[StageId::RankingCheck, StageId::FactCheck],
            correction: "For ranking claims, the claim with its ordinal rewritten; otherwise none.",
        },
        Verdict::MixedPartiallyTrue => VerdictExplanation {
            verdict,
            meaning: "\
At least one fact-check rating is in the mixed family (mixture, partially, mostly, somewhat).",
            produced_by: &[StageId::FactCheck],
            correction: "None.",
        },
        Verdict::Controversial => VerdictExplanation {
            verdict,
            meaning: "\
Fact-check ratings disagree: some are true-family, some false-family, none mixed-family.",
            produced_by: &[StageId::FactCheck],
            correction: "None.",
        },
        Verdict::LikelyTrue => VerdictExplanation {
            verdict,
            meaning: "\
No decisive fact-check signal; the best encyclopedia summary contains more true indicators \
(true, correct, accurate, verified, confirmed) than false indicators.",
            produced_by: &[StageId::EncyclopediaFallback],
            correction: "The original claim.",
        },
        Verdict::LikelyFalse => VerdictExplanation {
            verdict,
            meaning: "\
No decisive fact-check signal; the best encyclopedia summary contains more false indicators \
(myth, false, incorrect, not true, debunked, hoax) than true indicators.",
            produced_by: &[StageId::EncyclopediaFallback],
            correction: "None.",
        },
        Verdict::Unverified => VerdictExplanation {
            verdict,
            meaning: "\
No stage produced a decisive signal. This is the floor outcome for any claim.",
            produced_by: &[StageId::EncyclopediaFallback],
            correction: "None.",
        },
    }
}
