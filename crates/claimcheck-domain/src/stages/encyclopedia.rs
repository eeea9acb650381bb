use crate::model::{Claim, EncyclopediaPage};
use crate::policy::IndicatorWords;
use crate::report::Decision;
use claimcheck_types::{EvidenceItem, StageId, Verdict, ids};

/// Distinct indicator words present in a summary. Repeats of one word count once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndicatorScore {
    pub false_hits: usize,
    pub true_hits: usize,
}

impl IndicatorScore {
    pub fn verdict(&self) -> Verdict {
        use std::cmp::Ordering;
        match self.false_hits.cmp(&self.true_hits) {
            Ordering::Greater => Verdict::LikelyFalse,
            Ordering::Less => Verdict::LikelyTrue,
            Ordering::Equal => Verdict::Unverified,
        }
    }
}

pub fn score(summary: &str, indicators: &IndicatorWords) -> IndicatorScore {
    let lowered = summary.to_lowercase();
    let hits = |words: &[String]| words.iter().filter(|w| lowered.contains(w.as_str())).count();
    IndicatorScore {
        false_hits: hits(&indicators.false_words),
        true_hits: hits(&indicators.true_words),
    }
}

/// Reference-rated evidence item for a page: `"{title}: {summary prefix}..."`.
pub fn reference_item(page: &EncyclopediaPage, snippet_chars: usize) -> EvidenceItem {
    let prefix: String = page.summary.chars().take(snippet_chars).collect();
    EvidenceItem {
        source: ids::SOURCE_ENCYCLOPEDIA.to_string(),
        url: page.url.clone(),
        snippet: format!("{}: {}...", page.title, prefix),
        rating: Some(ids::RATING_REFERENCE.to_string()),
        claim_text: None,
    }
}

fn explanation(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::LikelyFalse => "Wikipedia suggests this claim may be incorrect.",
        Verdict::LikelyTrue => "Wikipedia suggests this claim may be correct.",
        _ => "Insufficient evidence to verify this claim.",
    }
}

/// Terminal stage: always decides. `prior` is the (non-decisive) fact-check evidence, which
/// stays ahead of the page reference.
pub fn decide(
    claim: &Claim,
    prior: Vec<EvidenceItem>,
    page: Option<&EncyclopediaPage>,
    indicators: &IndicatorWords,
    snippet_chars: usize,
) -> Decision {
    let verdict = page
        .map(|p| score(&p.summary, indicators).verdict())
        .unwrap_or(Verdict::Unverified);

    let corrected_statement = match verdict {
        Verdict::LikelyTrue => Some(claim.text().to_string()),
        _ => None,
    };

    let mut evidence = prior;
    if let Some(page) = page {
        evidence.push(reference_item(page, snippet_chars));
    }

    Decision {
        stage: StageId::EncyclopediaFallback,
        verdict,
        explanation: explanation(verdict).to_string(),
        corrected_statement,
        evidence,
    }
}
