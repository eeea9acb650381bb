use crate::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Claim check\n\n");
    out.push_str(&format!("> {}\n\n", report.claim));
    out.push_str(&format!("- Verdict: **{}**\n", report.verdict));
    if let Some(stage) = &report.decided_by {
        out.push_str(&format!("- Decided by: `{}`\n", stage));
    }
    out.push('\n');
    out.push_str(&report.explanation);
    out.push_str("\n\n");

    if let Some(corrected) = &report.corrected_statement {
        out.push_str(&format!("**Corrected statement:** {}\n\n", corrected));
    }

    if report.evidence.is_empty() {
        out.push_str("No evidence.\n");
        return out;
    }

    out.push_str("## Evidence\n\n");
    for (i, e) in report.evidence.iter().enumerate() {
        let source = if e.has_link() {
            format!("[{}]({})", e.source, e.url)
        } else {
            e.source.clone()
        };
        match &e.rating {
            Some(rating) => out.push_str(&format!(
                "{}. {} (_{}_): {}\n",
                i + 1,
                source,
                rating,
                e.snippet
            )),
            None => out.push_str(&format!("{}. {}: {}\n", i + 1, source, e.snippet)),
        }
    }

    out
}
