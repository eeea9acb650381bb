use crate::RenderableReport;

/// Plain-text rendering for terminals.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Claim:       {}\n", report.claim));
    out.push_str(&format!("Verdict:     {}\n", report.verdict));
    out.push_str(&format!("Explanation: {}\n", report.explanation));
    if let Some(corrected) = &report.corrected_statement {
        out.push_str(&format!("Correction:  {}\n", corrected));
    }

    if report.evidence.is_empty() {
        return out;
    }

    out.push_str("\nEvidence:\n");
    for (i, e) in report.evidence.iter().enumerate() {
        match &e.rating {
            Some(rating) => out.push_str(&format!(
                "  {}. {} [{}] {}\n",
                i + 1,
                e.source,
                rating,
                e.snippet
            )),
            None => out.push_str(&format!("  {}. {} {}\n", i + 1, e.source, e.snippet)),
        }
        if e.has_link() {
            out.push_str(&format!("     {}\n", e.url));
        }
    }

    out
}
