use async_trait::async_trait;
use uuid::Uuid;

use crate::entry::SequenceEntry;

/// Default number of matches a prefix lookup returns.
pub const DEFAULT_LOOKUP_LIMIT: u64 = 6;

/// Backing catalog of known sequences.
///
/// Query ordering is whatever the store returns; lookups impose none of
/// their own.
#[async_trait]
pub trait SequenceRepo: Send + Sync {
    /// Entries whose canonical term string matches the given `LIKE`-style
    /// prefix pattern, up to `limit` results.
    async fn query_by_prefix(
        &self,
        pattern: &str,
        limit: u64,
    ) -> anyhow::Result<Vec<SequenceEntry>>;

    /// All entries carrying the given external id. The caller detects the
    /// zero and many cases.
    async fn query_by_a_id(&self, a_id: &str) -> anyhow::Result<Vec<SequenceEntry>>;

    /// Persist the entry's current derived data.
    async fn commit(&self, entry: &SequenceEntry) -> anyhow::Result<()>;

    /// Insert the entry, or replace the terms of an existing entry with the
    /// same external id. Replacing terms clears any stored derived data.
    async fn upsert(&self, entry: &SequenceEntry) -> anyhow::Result<Uuid>;
}
