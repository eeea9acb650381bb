//! Decision stages, one module per stage.
//!
//! Each stage exposes a pure `decide` that either terminates the pipeline with a
//! [`Decision`](crate::Decision) or passes (`None`). Sequencing lives in the application layer.

pub mod encyclopedia;
pub mod fact_check;
pub mod knowledge_base;
pub mod ranking;
