//! Pure claim verification stages (no IO).
//!
//! Input: a claim plus whatever the external sources returned for it.
//! Output: stage decisions that the application layer sequences into a verdict.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod report;
pub mod source;
pub mod stages;

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;

pub use fingerprint::claim_fingerprint;
pub use model::Claim;
pub use policy::EngineConfig;
pub use report::Decision;
pub use source::{EncyclopediaSource, FactCheckSource, SourceError};
