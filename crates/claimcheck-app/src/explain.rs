//! The `explain` use case: describe a verdict label.

use claimcheck_types::{VerdictExplanation, all_verdict_labels, lookup_explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(VerdictExplanation),
    NotFound {
        identifier: String,
        available: Vec<&'static str>,
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: all_verdict_labels(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &VerdictExplanation) -> String {
    let title = exp.verdict.label();
    let stages: Vec<&str> = exp.produced_by.iter().map(|s| s.as_str()).collect();

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");
    out.push_str(exp.meaning);
    out.push_str("\n\n");
    out.push_str(&format!("Produced by: {}\n", stages.join(", ")));
    out.push_str(&format!("Correction:  {}\n", exp.correction));
    out
}

pub fn format_not_found(identifier: &str, available: &[&str]) -> String {
    let mut out = format!("Unknown verdict: {identifier}\n\nKnown verdicts:\n");
    for label in available {
        out.push_str(&format!("  - {label}\n"));
    }
    out
}
