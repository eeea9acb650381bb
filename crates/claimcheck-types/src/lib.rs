//! Stable DTOs and IDs used across the claimcheck workspace.
//!
//! This crate is intentionally boring:
//! - verdict labels, claim categories, and pipeline stage ids
//! - evidence items and the verdict result handed to presentation layers
//! - the emitted report envelope
//! - explain registry for verdict labels

#![forbid(unsafe_code)]

pub mod evidence;
pub mod explain;
pub mod ids;
pub mod report;
pub mod verdict;

pub use evidence::{EvidenceItem, VerdictResult};
pub use explain::{VerdictExplanation, all_verdict_labels, lookup_explanation};
pub use report::{ClaimReportV1, RunMeta, SCHEMA_REPORT_V1, ToolMeta};
pub use verdict::{Category, StageId, Verdict};
