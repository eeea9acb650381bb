//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Ranking correction round-trips
//! - Ordinal suffix formatting
//! - Fact-check decision table precedence
//! - Encyclopedia scoring symmetry

use crate::model::Claim;
use crate::stages::{encyclopedia, fact_check, knowledge_base, ranking};
use crate::test_support::{config, rated};
use claimcheck_types::{Category, Verdict};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_category_and_entity() -> impl Strategy<Value = (Category, String, &'static str)> {
    prop_oneof![
        prop::sample::select(vec![
            "united states",
            "china",
            "japan",
            "germany",
            "india",
            "united kingdom",
            "france",
            "italy",
            "brazil",
            "canada",
        ])
        .prop_map(|e| (Category::Economy, e.to_string(), "economy")),
        prop::sample::select(vec![
            "russia",
            "canada",
            "china",
            "united states",
            "brazil",
            "australia",
            "india",
            "argentina",
            "kazakhstan",
            "algeria",
        ])
        .prop_map(|e| (Category::Area, e.to_string(), "country by area")),
    ]
}

fn arb_suffix() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["st", "nd", "rd", "th", "TH", "Nd"])
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut cs = w.chars();
            match cs.next() {
                Some(first) => first.to_uppercase().chain(cs).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn arb_rating() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "true",
        "false",
        "mostly true",
        "half true",
        "mixture",
        "partially false",
        "fake",
        "accurate",
        "misleading",
        "satire",
        "unproven",
        "incorrect",
    ])
    .prop_map(|r| r.to_string())
}

// ============================================================================
// Property tests: Ranking verifier
// ============================================================================

proptest! {
    /// Correcting a claim and verifying the correction yields a correct claim.
    #[test]
    fn ranking_correction_round_trips(
        (category, entity, noun) in arb_category_and_entity(),
        claimed in 1u32..200,
        suffix in arb_suffix(),
    ) {
        let cfg = config();
        let text = format!("{} is the {}{} largest {}", title_case(&entity), claimed, suffix, noun);
        let claim = Claim::new(&text);

        let check = ranking::verify(&claim, &cfg.rankings).expect("ranking claim decides");
        prop_assert_eq!(check.category, category);

        let corrected = check.corrected_text.clone().unwrap_or(text.clone());
        let again = ranking::verify(&Claim::new(&corrected), &cfg.rankings)
            .expect("corrected claim decides");
        prop_assert!(again.is_correct, "corrected claim {:?} should verify", corrected);
        prop_assert_eq!(again.category, category);
    }

    /// Claims without any ordinal never produce a ranking decision.
    #[test]
    fn no_ordinal_means_no_decision(
        (_category, entity, noun) in arb_category_and_entity(),
        filler in "[a-z ]{0,20}",
    ) {
        let cfg = config();
        let claim = Claim::new(&format!("{entity} is {filler} large {noun}"));
        prop_assert!(ranking::verify(&claim, &cfg.rankings).is_none());
    }

    /// Suffix depends only on the rank value, with no teens special case.
    #[test]
    fn ordinal_suffix_table(rank in 0u32..10_000) {
        let expected = match rank {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        prop_assert_eq!(ranking::ordinal(rank), format!("{rank}{expected}"));
    }
}

// ============================================================================
// Property tests: Decision precedence
// ============================================================================

proptest! {
    /// A knowledge base trigger always decides, whatever surrounds it.
    #[test]
    fn knowledge_trigger_always_verifies(prefix in "[a-zA-Z ]{0,20}", suffix in "[a-zA-Z0-9 ]{0,20}") {
        let cfg = config();
        let claim = Claim::new(&format!("{prefix} Flat Earth {suffix}"));
        let decision = knowledge_base::decide(&claim, &cfg.knowledge_base).expect("trigger");
        prop_assert_eq!(decision.verdict, Verdict::Verified);
    }

    /// Any mixed-family rating makes the outcome Mixed; true+false without mixed is
    /// Controversial, never Mixed.
    #[test]
    fn fact_check_precedence(ratings in prop::collection::vec(arb_rating(), 0..8)) {
        let cfg = config();
        let evidence: Vec<_> = ratings.iter().map(|r| rated(r)).collect();
        let counts = fact_check::RatingCounts::tally(&evidence, &cfg.rating_families);
        let outcome = fact_check::classify(&counts);

        if counts.mixed_count > 0 {
            prop_assert_eq!(outcome, Some(fact_check::FactCheckOutcome::Mixed));
        } else if counts.true_count > 0 && counts.false_count > 0 {
            prop_assert_eq!(outcome, Some(fact_check::FactCheckOutcome::Controversial));
        } else if counts.true_count > 0 {
            prop_assert_eq!(outcome, Some(fact_check::FactCheckOutcome::AllTrue));
        } else if counts.false_count > 0 {
            prop_assert_eq!(outcome, Some(fact_check::FactCheckOutcome::AllFalse));
        } else {
            prop_assert_eq!(outcome, None);
        }
    }

    /// The fallback never yields a fact-check or ranking label.
    #[test]
    fn fallback_labels_are_closed(summary in ".{0,120}") {
        let cfg = config();
        let score = encyclopedia::score(&summary, &cfg.indicators);
        prop_assert!(matches!(
            score.verdict(),
            Verdict::LikelyTrue | Verdict::LikelyFalse | Verdict::Unverified
        ));
    }
}
