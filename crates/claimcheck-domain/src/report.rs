use claimcheck_types::{EvidenceItem, StageId, Verdict, VerdictResult};

/// A terminal decision from one stage, before supplementary references are appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub stage: StageId,
    pub verdict: Verdict,
    pub explanation: String,
    pub corrected_statement: Option<String>,
    pub evidence: Vec<EvidenceItem>,
}

impl Decision {
    /// Append supplementary references. Never alters the verdict.
    pub fn into_result(self, supplementary: Vec<EvidenceItem>) -> VerdictResult {
        let mut evidence = self.evidence;
        evidence.extend(supplementary);
        VerdictResult {
            verdict: self.verdict,
            explanation: self.explanation,
            corrected_statement: self.corrected_statement,
            evidence,
        }
    }
}
