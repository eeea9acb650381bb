use crate::model::Claim;
use crate::policy::CategoryRule;
use crate::report::Decision;
use claimcheck_types::{Category, StageId, Verdict};
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Digits followed by an ordinal suffix, e.g. `10th`, `2ND`.
static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)(?:st|nd|rd|th)").expect("ordinal pattern"));

/// Outcome of checking a "<entity> is the Nth largest <category>" claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingCheck {
    pub category: Category,
    pub subject: String,
    pub claimed_rank: String,
    pub canonical_rank: u32,
    pub is_correct: bool,
    /// Claim with its first ordinal rewritten to the canonical rank. `None` when correct.
    pub corrected_text: Option<String>,
}

/// Suffix table: 1 -> st, 2 -> nd, 3 -> rd, everything else -> th (including 11..13).
pub fn ordinal_suffix(rank: u32) -> &'static str {
    match rank {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

pub fn ordinal(rank: u32) -> String {
    format!("{rank}{}", ordinal_suffix(rank))
}

/// Digits of the first ordinal in `text`, if any.
pub fn first_ordinal(text: &str) -> Option<&str> {
    ORDINAL
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Replace only the first ordinal in `text` with `rank` and its suffix.
pub fn replace_first_ordinal(text: &str, rank: u32) -> String {
    ORDINAL.replace(text, NoExpand(&ordinal(rank))).into_owned()
}

/// Check a ranking claim.
///
/// Returns `None` (no decision) when no category keyword matches, when no table entity is
/// mentioned, or when the claim carries no ordinal. Only the first matching category is
/// considered; a claim with an economy keyword never reaches the area table.
pub fn verify(claim: &Claim, rules: &[CategoryRule]) -> Option<RankingCheck> {
    let rule = rules.iter().find(|r| claim.mentions_any(&r.keywords))?;
    let subject = rule.table.first_mentioned(claim)?;
    let claimed = first_ordinal(claim.text())?;

    let is_correct = claimed.parse::<u64>().ok() == Some(u64::from(subject.rank));
    let corrected_text = if is_correct {
        None
    } else {
        Some(replace_first_ordinal(claim.text(), subject.rank))
    };

    Some(RankingCheck {
        category: rule.table.category,
        subject: subject.entity.clone(),
        claimed_rank: claimed.to_string(),
        canonical_rank: subject.rank,
        is_correct,
        corrected_text,
    })
}

pub fn decide(claim: &Claim, rules: &[CategoryRule]) -> Option<Decision> {
    let check = verify(claim, rules)?;
    let category = check.category;

    let decision = if check.is_correct {
        Decision {
            stage: StageId::RankingCheck,
            verdict: Verdict::True,
            explanation: format!("The {category} ranking claim is correct."),
            corrected_statement: Some(claim.text().to_string()),
            evidence: Vec::new(),
        }
    } else {
        let evidence = rules
            .iter()
            .find(|r| r.table.category == category)
            .map(|r| vec![r.correction_source.clone()])
            .unwrap_or_default();
        Decision {
            stage: StageId::RankingCheck,
            verdict: Verdict::False,
            explanation: format!("The {category} ranking claim is incorrect."),
            corrected_statement: check.corrected_text,
            evidence,
        }
    };
    Some(decision)
}
