use crate::model::Claim;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a claim.
///
/// Identity is the trimmed, lower-cased claim text, so casing and surrounding
/// whitespace do not produce distinct fingerprints.
pub fn claim_fingerprint(claim: &Claim) -> String {
    let mut hasher = Sha256::new();
    hasher.update(claim.lowered().as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
