use crate::{StageId, VerdictResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for claimcheck reports.
pub const SCHEMA_REPORT_V1: &str = "claimcheck.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub duration_ms: u64,
}

/// Report envelope for a single verified claim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClaimReportV1 {
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,

    /// The claim as submitted (trimmed, original casing).
    pub claim: String,

    /// sha256 hex of the trimmed, lower-cased claim. Stable across runs for dedup.
    pub claim_fingerprint: String,

    pub decided_by: StageId,
    pub result: VerdictResult,
}
