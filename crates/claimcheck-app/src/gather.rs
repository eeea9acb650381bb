//! Evidence gathering from the external sources. Every failure here degrades to an empty
//! result; nothing propagates to the pipeline.

use claimcheck_domain::model::EncyclopediaPage;
use claimcheck_domain::stages::{encyclopedia, fact_check};
use claimcheck_domain::{Claim, EncyclopediaSource, FactCheckSource};
use claimcheck_types::EvidenceItem;
use tracing::{debug, warn};

pub(crate) fn fact_check_evidence(source: &dyn FactCheckSource, claim: &Claim) -> Vec<EvidenceItem> {
    match source.search_claims(claim.text()) {
        Ok(records) => fact_check::evidence_from_records(&records),
        Err(err) => {
            warn!(error = %err, "fact-check search failed; continuing without fact checks");
            Vec::new()
        }
    }
}

/// First candidate page that opens, in the provider's order. Ambiguous and missing candidates
/// are skipped; a transport failure ends the search.
pub(crate) fn resolve_page(
    source: &dyn EncyclopediaSource,
    claim: &Claim,
    limit: usize,
) -> Option<EncyclopediaPage> {
    let titles = match source.search(claim.text(), limit) {
        Ok(titles) => titles,
        Err(err) => {
            warn!(error = %err, "encyclopedia search failed");
            return None;
        }
    };
    for title in titles {
        match source.open_page(&title) {
            Ok(page) => {
                debug!(title = %page.title, "fallback page resolved");
                return Some(page);
            }
            Err(err) if err.is_candidate_miss() => {
                debug!(%title, error = %err, "skipping candidate");
            }
            Err(err) => {
                warn!(%title, error = %err, "encyclopedia page lookup failed");
                return None;
            }
        }
    }
    None
}

/// Up to `count` reference items for the claim. Pages that fail to open are skipped.
pub(crate) fn supplementary_references(
    source: &dyn EncyclopediaSource,
    claim: &Claim,
    count: usize,
    snippet_chars: usize,
) -> Vec<EvidenceItem> {
    if count == 0 {
        return Vec::new();
    }
    let titles = match source.search(claim.text(), count) {
        Ok(titles) => titles,
        Err(err) => {
            warn!(error = %err, "supplementary search failed");
            return Vec::new();
        }
    };
    titles
        .iter()
        .take(count)
        .filter_map(|title| match source.open_page(title) {
            Ok(page) => Some(encyclopedia::reference_item(&page, snippet_chars)),
            Err(err) => {
                debug!(%title, error = %err, "skipping supplementary reference");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimcheck_test_util::{FailingSource, StaticEncyclopedia, StaticFactChecks, rated_record};

    #[test]
    fn failed_fact_check_search_is_empty() {
        let claim = Claim::new("anything");
        assert!(fact_check_evidence(&FailingSource, &claim).is_empty());
    }

    #[test]
    fn fact_check_records_become_evidence() {
        let source = StaticFactChecks::new(vec![rated_record("x", "Snopes", "False")]);
        let evidence = fact_check_evidence(&source, &Claim::new("x"));
        assert_eq!(evidence.len(), 1);
        assert_eq!(evidence[0].source, "Snopes");
        assert_eq!(evidence[0].rating(), "false");
    }

    #[test]
    fn resolve_page_skips_ambiguous_and_missing_candidates() {
        let source = StaticEncyclopedia::new()
            .ambiguous("Mercury")
            .missing("Mercury (planet) old")
            .page("Mercury (planet)", "Smallest planet.");
        let page = resolve_page(&source, &Claim::new("mercury"), 10).expect("page");
        assert_eq!(page.title, "Mercury (planet)");
    }

    #[test]
    fn resolve_page_respects_search_limit() {
        let source = StaticEncyclopedia::new()
            .ambiguous("Mercury")
            .page("Mercury (planet)", "Smallest planet.");
        assert_eq!(resolve_page(&source, &Claim::new("mercury"), 1), None);
    }

    #[test]
    fn resolve_page_gives_up_when_unavailable() {
        assert_eq!(resolve_page(&FailingSource, &Claim::new("x"), 10), None);
    }

    #[test]
    fn supplementary_references_are_capped_and_skip_failures() {
        let source = StaticEncyclopedia::new()
            .page("A", "first")
            .ambiguous("B")
            .page("C", "third")
            .page("D", "fourth");
        let refs = supplementary_references(&source, &Claim::new("x"), 3, 200);
        let snippets: Vec<&str> = refs.iter().map(|r| r.snippet.as_str()).collect();
        assert_eq!(snippets, vec!["A: first...", "C: third..."]);
        assert!(refs.iter().all(|r| r.rating() == "reference"));
    }

    #[test]
    fn zero_supplementary_references_skip_search() {
        let source = StaticEncyclopedia::new().page("A", "first");
        assert!(supplementary_references(&source, &Claim::new("x"), 0, 200).is_empty());
        assert_eq!(source.searches(), 0);
    }
}
