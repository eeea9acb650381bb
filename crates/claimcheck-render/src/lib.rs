//! Rendering of verdict reports for terminals and Markdown documents.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{RenderableEvidence, RenderableReport};
pub use text::render_text;
