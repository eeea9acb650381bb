//! The `verify` use case: resolve config, build sources, run the pipeline, produce a report.

use crate::verify::verify_claim;
use anyhow::Context;
use claimcheck_domain::{Claim, claim_fingerprint};
use claimcheck_settings::{ClaimcheckConfigV1, Overrides, ResolvedConfig};
use claimcheck_types::{ClaimReportV1, RunMeta, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the verify use case.
#[derive(Clone, Debug)]
pub struct VerifyInput<'a> {
    pub claim: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
    /// Environment lookup for the fact-check API key, consulted only when the overrides
    /// carry no key.
    pub env: fn(&str) -> Option<String>,
}

#[derive(Clone, Debug)]
pub struct VerifyOutput {
    pub report: ClaimReportV1,
    pub resolved_config: ResolvedConfig,
}

pub fn run_verify(input: VerifyInput<'_>) -> anyhow::Result<VerifyOutput> {
    let started_at = OffsetDateTime::now_utc();

    let claim = Claim::new(input.claim);
    if claim.is_empty() {
        anyhow::bail!("please enter a claim to verify");
    }

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        ClaimcheckConfigV1::default()
    } else {
        claimcheck_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let mut resolved =
        claimcheck_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    if let Some(fc) = resolved.providers.fact_check.as_mut()
        && fc.api_key.is_none()
    {
        fc.api_key = (input.env)(&fc.api_key_env);
    }

    let sources =
        claimcheck_providers::build_sources(&resolved.providers).context("build sources")?;

    let verification = verify_claim(
        &claim,
        &resolved.engine,
        sources.fact_check.as_ref(),
        sources.encyclopedia.as_ref(),
    );

    let finished_at = OffsetDateTime::now_utc();
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;

    let report = ClaimReportV1 {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "claimcheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: RunMeta {
            started_at,
            finished_at,
            duration_ms,
        },
        claim: claim.text().to_string(),
        claim_fingerprint: claim_fingerprint(&claim),
        decided_by: verification.decided_by,
        result: verification.result,
    };

    Ok(VerifyOutput {
        report,
        resolved_config: resolved,
    })
}
