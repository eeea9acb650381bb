//! Use case orchestration for claimcheck.
//!
//! This crate provides the application layer: the verification pipeline that sequences the
//! domain stages over the evidence sources, plus the report, render and explain use cases.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod gather;
mod render;
mod report;
mod run;
mod verify;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, render_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use run::{VerifyInput, VerifyOutput, run_verify};
pub use verify::{Verification, verify_claim};
