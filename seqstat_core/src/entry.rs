use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delimiter used in the canonical stored form of a term sequence.
pub const TERM_DELIMITER: char = ',';

/// Join terms into the canonical delimited form.
#[must_use]
pub fn canonical_join(terms: &[String]) -> String {
    terms.join(&TERM_DELIMITER.to_string())
}

/// A catalog sequence with its optional derived representation.
///
/// The catalog owns the storage lifecycle of these records; lookup code only
/// reads them and fills in `data` when it is still absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceEntry {
    /// Internal storage id.
    pub id: Uuid,
    /// External identifier, e.g. `A000045`.
    pub a_id: String,
    /// Ordered sequence terms in their canonical string form.
    pub terms: Vec<String>,
    /// Derived representation; `None` until it has been computed.
    pub data: Option<DerivedData>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SequenceEntry {
    /// Create a fresh entry with no derived data yet.
    #[must_use]
    pub fn new(a_id: impl Into<String>, terms: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            a_id: a_id.into(),
            terms,
            data: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Canonical delimited form of the terms, as persisted by the catalog.
    #[must_use]
    pub fn canonical_terms(&self) -> String {
        canonical_join(&self.terms)
    }
}

/// Derived representation of a sequence entry.
///
/// Produced by a [`crate::Materializer`]; the lookup protocol only cares
/// about its presence, never its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedData {
    /// Number of stored terms, parseable or not.
    pub term_count: usize,
    /// Smallest numeric term, if any term is numeric.
    pub minimum: Option<f64>,
    /// Largest numeric term, if any term is numeric.
    pub maximum: Option<f64>,
    /// Median over the numeric terms (0 when none are numeric).
    pub median: f64,
    /// Arithmetic mean over the numeric terms (0 when none are numeric).
    pub average: f64,
    /// SHA-256 fingerprint of the canonical term string.
    pub fingerprint: String,
}
