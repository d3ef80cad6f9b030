//! Fingerprinting for derived sequence data.

use sha2::{Digest, Sha256};

/// SHA-256 fingerprint of a canonical term string.
///
/// Stored inside the derived representation so stale data can be detected
/// after an entry's terms are replaced.
#[must_use]
pub fn term_fingerprint(canonical_terms: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_terms.as_bytes());
    format!("{:x}", hasher.finalize())
}
