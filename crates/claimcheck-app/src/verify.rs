//! The verification pipeline: knowledge base, ranking check, fact check, encyclopedia
//! fallback, then supplementary references.

use crate::gather;
use claimcheck_domain::model::EncyclopediaPage;
use claimcheck_domain::stages::{encyclopedia, fact_check, knowledge_base, ranking};
use claimcheck_domain::{Claim, Decision, EncyclopediaSource, EngineConfig, FactCheckSource};
use claimcheck_types::{EvidenceItem, StageId, VerdictResult};
use tracing::{debug, info};

/// Result of one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub decided_by: StageId,
    pub result: VerdictResult,
}

enum Stage {
    KnowledgeBase,
    RankingCheck,
    FactCheck,
    EncyclopediaFallback(DynamicEvidence),
    Done(Decision),
}

/// Everything fetched from the external sources once the static stages have passed.
#[derive(Default)]
struct DynamicEvidence {
    fact_checks: Vec<EvidenceItem>,
    page: Option<EncyclopediaPage>,
    references: Vec<EvidenceItem>,
}

/// Verify one claim. Total: every non-empty claim gets a verdict, whatever the sources do.
pub fn verify_claim(
    claim: &Claim,
    config: &EngineConfig,
    fact_checks: &dyn FactCheckSource,
    encyclopedia: &dyn EncyclopediaSource,
) -> Verification {
    let mut references = None;
    let mut stage = Stage::KnowledgeBase;

    let decision = loop {
        stage = match stage {
            Stage::KnowledgeBase => match knowledge_base::decide(claim, &config.knowledge_base) {
                Some(decision) => Stage::Done(decision),
                None => Stage::RankingCheck,
            },
            Stage::RankingCheck => match ranking::decide(claim, &config.rankings) {
                Some(decision) => Stage::Done(decision),
                None => Stage::FactCheck,
            },
            Stage::FactCheck => {
                let mut gathered = gather_dynamic(claim, config, fact_checks, encyclopedia);
                references = Some(std::mem::take(&mut gathered.references));
                match fact_check::decide(claim, &gathered.fact_checks, &config.rating_families) {
                    Some(decision) => Stage::Done(decision),
                    None => Stage::EncyclopediaFallback(gathered),
                }
            }
            Stage::EncyclopediaFallback(gathered) => Stage::Done(encyclopedia::decide(
                claim,
                gathered.fact_checks,
                gathered.page.as_ref(),
                &config.indicators,
                config.references.snippet_chars,
            )),
            Stage::Done(decision) => break decision,
        };
    };

    let supplementary = references.unwrap_or_else(|| {
        gather::supplementary_references(
            encyclopedia,
            claim,
            config.references.supplementary_for(decision.stage),
            config.references.snippet_chars,
        )
    });

    info!(
        stage = decision.stage.as_str(),
        verdict = decision.verdict.label(),
        evidence = decision.evidence.len() + supplementary.len(),
        "claim decided"
    );

    Verification {
        decided_by: decision.stage,
        result: decision.into_result(supplementary),
    }
}

/// Fact-check search on one side, fallback page plus supplementary references on the other.
/// A failure on one side leaves the other untouched.
fn gather_dynamic(
    claim: &Claim,
    config: &EngineConfig,
    fact_checks: &dyn FactCheckSource,
    encyclopedia: &dyn EncyclopediaSource,
) -> DynamicEvidence {
    let limits = config.references;
    let (fact_check_evidence, (page, references)) = rayon::join(
        || gather::fact_check_evidence(fact_checks, claim),
        || {
            let page = gather::resolve_page(encyclopedia, claim, limits.search_results);
            let references = gather::supplementary_references(
                encyclopedia,
                claim,
                limits.supplementary_for(StageId::FactCheck),
                limits.snippet_chars,
            );
            (page, references)
        },
    );
    debug!(
        fact_checks = fact_check_evidence.len(),
        page = page.as_ref().map(|p| p.title.as_str()),
        references = references.len(),
        "dynamic evidence gathered"
    );
    DynamicEvidence {
        fact_checks: fact_check_evidence,
        page,
        references,
    }
}
