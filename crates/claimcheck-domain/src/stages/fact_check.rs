use crate::model::{Claim, FactCheckRecord};
use crate::policy::RatingFamilies;
use crate::report::Decision;
use claimcheck_types::{EvidenceItem, StageId, Verdict, ids};

/// Flatten provider records into evidence: one item per review that carries a textual rating.
pub fn evidence_from_records(records: &[FactCheckRecord]) -> Vec<EvidenceItem> {
    let mut evidence = Vec::new();
    for record in records {
        for review in &record.reviews {
            let rating = review.textual_rating.as_deref().unwrap_or("").trim();
            if rating.is_empty() {
                continue;
            }
            evidence.push(EvidenceItem {
                source: review
                    .publisher
                    .clone()
                    .unwrap_or_else(|| ids::SOURCE_UNKNOWN.to_string()),
                url: review
                    .url
                    .clone()
                    .unwrap_or_else(|| ids::URL_UNKNOWN.to_string()),
                snippet: format!("{} — {}", review.title.as_deref().unwrap_or(""), rating),
                rating: Some(rating.to_lowercase()),
                claim_text: Some(record.text.clone().unwrap_or_default()),
            });
        }
    }
    evidence
}

/// Number of evidence items whose rating contains a word from each family.
///
/// An item may count toward several families ("incorrect" contains "correct").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RatingCounts {
    pub true_count: usize,
    pub false_count: usize,
    pub mixed_count: usize,
}

impl RatingCounts {
    pub fn tally(evidence: &[EvidenceItem], families: &RatingFamilies) -> Self {
        let count = |family: &[String]| {
            evidence
                .iter()
                .filter(|e| {
                    let rating = e.rating().to_lowercase();
                    family.iter().any(|word| rating.contains(word.as_str()))
                })
                .count()
        };
        Self {
            true_count: count(&families.true_family),
            false_count: count(&families.false_family),
            mixed_count: count(&families.mixed_family),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactCheckOutcome {
    AllTrue,
    AllFalse,
    Mixed,
    Controversial,
}

impl FactCheckOutcome {
    pub fn verdict(self) -> Verdict {
        match self {
            FactCheckOutcome::AllTrue => Verdict::True,
            FactCheckOutcome::AllFalse => Verdict::False,
            FactCheckOutcome::Mixed => Verdict::MixedPartiallyTrue,
            FactCheckOutcome::Controversial => Verdict::Controversial,
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            FactCheckOutcome::AllTrue => "Verified by multiple fact-check sources.",
            FactCheckOutcome::AllFalse => "Contradicted by fact-check sources.",
            FactCheckOutcome::Mixed => "The claim contains both true and false elements.",
            FactCheckOutcome::Controversial => "Conflicting evidence from different sources.",
        }
    }
}

pub struct DecisionRow {
    pub guard: fn(&RatingCounts) -> bool,
    pub outcome: FactCheckOutcome,
}

/// Evaluated top to bottom; the first guard that holds wins.
pub const DECISION_TABLE: [DecisionRow; 4] = [
    DecisionRow {
        guard: only_true,
        outcome: FactCheckOutcome::AllTrue,
    },
    DecisionRow {
        guard: only_false,
        outcome: FactCheckOutcome::AllFalse,
    },
    DecisionRow {
        guard: any_mixed,
        outcome: FactCheckOutcome::Mixed,
    },
    DecisionRow {
        guard: true_and_false,
        outcome: FactCheckOutcome::Controversial,
    },
];

fn only_true(c: &RatingCounts) -> bool {
    c.true_count > 0 && c.false_count == 0 && c.mixed_count == 0
}

fn only_false(c: &RatingCounts) -> bool {
    c.false_count > 0 && c.true_count == 0 && c.mixed_count == 0
}

fn any_mixed(c: &RatingCounts) -> bool {
    c.mixed_count > 0
}

fn true_and_false(c: &RatingCounts) -> bool {
    c.true_count > 0 && c.false_count > 0
}

pub fn classify(counts: &RatingCounts) -> Option<FactCheckOutcome> {
    DECISION_TABLE
        .iter()
        .find(|row| (row.guard)(counts))
        .map(|row| row.outcome)
}

/// Decide from fact-check evidence, or pass when the ratings carry no usable signal.
pub fn decide(
    claim: &Claim,
    evidence: &[EvidenceItem],
    families: &RatingFamilies,
) -> Option<Decision> {
    let outcome = classify(&RatingCounts::tally(evidence, families))?;
    let corrected_statement = match outcome {
        FactCheckOutcome::AllTrue => Some(claim.text().to_string()),
        _ => None,
    };
    Some(Decision {
        stage: StageId::FactCheck,
        verdict: outcome.verdict(),
        explanation: outcome.explanation().to_string(),
        corrected_statement,
        evidence: evidence.to_vec(),
    })
}
