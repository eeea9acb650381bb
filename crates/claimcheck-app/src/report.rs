use anyhow::Context;
use claimcheck_render::{RenderableEvidence, RenderableReport};
use claimcheck_types::{ClaimReportV1, SCHEMA_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<ClaimReportV1> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse claimcheck v1 report")
}

pub fn serialize_report(report: &ClaimReportV1) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &ClaimReportV1) -> RenderableReport {
    RenderableReport {
        claim: report.claim.clone(),
        verdict: report.result.verdict.label().to_string(),
        explanation: report.result.explanation.clone(),
        corrected_statement: report.result.corrected_statement.clone(),
        decided_by: Some(report.decided_by.as_str().to_string()),
        evidence: report
            .result
            .evidence
            .iter()
            .map(|e| RenderableEvidence {
                source: e.source.clone(),
                url: e.url.clone(),
                snippet: e.snippet.clone(),
                rating: e.rating.clone(),
            })
            .collect(),
    }
}
