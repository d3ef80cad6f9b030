use crate::entry::DerivedData;

/// Strategy computing the derived representation of a term sequence.
///
/// Implementations must be deterministic over the input terms: the same
/// ordered term list always yields an equal [`DerivedData`]. Lookups rely on
/// this to treat concurrent double-computation of the same entry as a benign
/// last-write-wins race instead of taking a per-entry lock.
pub trait Materializer: Send + Sync {
    fn materialize(&self, terms: &[String]) -> DerivedData;
}
