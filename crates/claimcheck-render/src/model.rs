#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableEvidence {
    pub source: String,
    /// `#` when the source has no address.
    pub url: String,
    pub snippet: String,
    pub rating: Option<String>,
}

impl RenderableEvidence {
    pub fn has_link(&self) -> bool {
        !self.url.is_empty() && self.url != "#"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub claim: String,
    pub verdict: String,
    pub explanation: String,
    pub corrected_statement: Option<String>,
    /// Stage that produced the verdict, when known.
    pub decided_by: Option<String>,
    pub evidence: Vec<RenderableEvidence>,
}

#[cfg(test)]
pub(crate) fn sample_report() -> RenderableReport {
    RenderableReport {
        claim: "India is the 10th largest economy".to_string(),
        verdict: "False".to_string(),
        explanation: "The economy ranking claim is incorrect.".to_string(),
        corrected_statement: Some("India is the 5th largest economy".to_string()),
        decided_by: Some("ranking_check".to_string()),
        evidence: vec![
            RenderableEvidence {
                source: "IMF".to_string(),
                url: "https://www.imf.org/weo".to_string(),
                snippet: "Economies ranked by nominal GDP.".to_string(),
                rating: Some("corrected".to_string()),
            },
            RenderableEvidence {
                source: "Unknown Source".to_string(),
                url: "#".to_string(),
                snippet: "Review — false".to_string(),
                rating: None,
            },
        ],
    }
}
