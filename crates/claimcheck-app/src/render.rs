//! Render use cases over in-memory reports.

use claimcheck_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    claimcheck_render::render_markdown(report)
}

pub fn render_text(report: &RenderableReport) -> String {
    claimcheck_render::render_text(report)
}
