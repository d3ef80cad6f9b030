use std::sync::Arc;

use chrono::Utc;
use seqstat_core::{
    CatalogError, CatalogResult, Materializer, PersistFailurePolicy, SequenceEntry, SequenceRepo,
    TERM_DELIMITER, canonical_join,
};
use tracing::{debug, info, warn};

use crate::import::StrippedEntry;
use crate::materialize::TermStatsMaterializer;
use crate::storage::DatabaseSequenceRepo;

/// Catalog lookup with lazy materialization.
///
/// Every entry a lookup returns carries its derived data: entries found with
/// data already stored are passed through, the rest get it computed and
/// committed on the way out. Concurrent lookups of the same entry may both
/// compute; the materializer contract makes that race benign.
pub struct CatalogManager {
    /// Backing sequence catalog
    repo: Arc<dyn SequenceRepo>,
    /// Strategy computing derived data for entries that lack it
    materializer: Arc<dyn Materializer>,
    /// What to do when committing freshly computed data fails
    persist_failure: PersistFailurePolicy,
}

impl CatalogManager {
    /// Create a manager over an arbitrary repository with the default
    /// materializer and persistence policy.
    #[must_use]
    pub fn new(repo: Arc<dyn SequenceRepo>) -> Self {
        Self {
            repo,
            materializer: Arc::new(TermStatsMaterializer),
            persist_failure: PersistFailurePolicy::default(),
        }
    }

    /// Connect to the database-backed catalog.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to catalog for CatalogManager");
        let repo = DatabaseSequenceRepo::connect(database_url).await?;
        info!("CatalogManager initialized");
        Ok(Self::new(Arc::new(repo)))
    }

    /// Swap in a custom materialization strategy.
    #[must_use]
    pub fn with_materializer(mut self, materializer: Arc<dyn Materializer>) -> Self {
        self.materializer = materializer;
        self
    }

    /// Set the persistence-failure policy, applied to both lookup paths.
    #[must_use]
    pub fn with_persist_failure(mut self, policy: PersistFailurePolicy) -> Self {
        self.persist_failure = policy;
        self
    }

    /// Entries whose stored terms start with the exact ordered `terms` list,
    /// up to `limit` results in repository order.
    ///
    /// Every returned entry has its derived data present.
    pub async fn find_by_prefix(
        &self,
        terms: &[String],
        limit: u64,
    ) -> CatalogResult<Vec<SequenceEntry>> {
        let pattern = prefix_pattern(terms);
        debug!("Prefix lookup: pattern={pattern} limit={limit}");

        let mut entries = self.repo.query_by_prefix(&pattern, limit).await?;
        for entry in &mut entries {
            self.ensure_materialized(entry).await?;
        }

        Ok(entries)
    }

    /// The single entry with the given external id, with derived data
    /// present.
    ///
    /// Zero matches raise [`CatalogError::NotFound`]; more than one raise
    /// [`CatalogError::Ambiguous`], a catalog-integrity violation that is
    /// surfaced rather than silently resolved.
    pub async fn find_by_a_id(&self, a_id: &str) -> CatalogResult<SequenceEntry> {
        let mut matches = self.repo.query_by_a_id(a_id).await?;

        match matches.len() {
            0 => Err(CatalogError::NotFound {
                a_id: a_id.to_owned(),
            }),
            1 => {
                let mut entry = matches.remove(0);
                self.ensure_materialized(&mut entry).await?;
                Ok(entry)
            }
            count => Err(CatalogError::Ambiguous {
                a_id: a_id.to_owned(),
                count,
            }),
        }
    }

    /// Upsert parsed exchange-format entries into the catalog.
    ///
    /// Re-imported ids get their terms replaced and stored derived data
    /// cleared; the next lookup recomputes it.
    pub async fn import_entries(&self, entries: &[StrippedEntry]) -> CatalogResult<usize> {
        let mut imported = 0_usize;
        for stripped in entries {
            let entry = SequenceEntry::new(stripped.a_id.clone(), stripped.terms.clone());
            self.repo.upsert(&entry).await?;
            imported += 1;
        }

        info!("Imported {imported} sequences");
        Ok(imported)
    }

    /// Compute and commit the derived data if it is still absent.
    ///
    /// The entry keeps its freshly computed data even when the commit fails;
    /// whether the lookup survives that is decided by the configured
    /// [`PersistFailurePolicy`].
    async fn ensure_materialized(&self, entry: &mut SequenceEntry) -> CatalogResult<()> {
        if entry.data.is_some() {
            return Ok(());
        }

        debug!("Materializing derived data for {}", entry.a_id);
        entry.data = Some(self.materializer.materialize(&entry.terms));
        entry.updated_at = Utc::now();

        if let Err(source) = self.repo.commit(entry).await {
            match self.persist_failure {
                PersistFailurePolicy::Ignore => {
                    warn!(
                        "Failed to persist derived data for {}: {source}",
                        entry.a_id
                    );
                }
                PersistFailurePolicy::Propagate => {
                    return Err(CatalogError::Persistence {
                        a_id: entry.a_id.clone(),
                        source,
                    });
                }
            }
        }

        Ok(())
    }
}

/// `LIKE` pattern matching every stored sequence that starts with the exact
/// ordered term list followed by at least one more term.
fn prefix_pattern(terms: &[String]) -> String {
    let mut pattern = canonical_join(terms);
    pattern.push(TERM_DELIMITER);
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_joins_terms_and_appends_wildcard() {
        let terms = vec!["1".to_string(), "1".to_string(), "2".to_string()];
        assert_eq!(prefix_pattern(&terms), "1,1,2,%");
    }

    #[test]
    fn empty_prefix_matches_nothing_stored() {
        // no canonical term string starts with a bare delimiter
        assert_eq!(prefix_pattern(&[]), ",%");
    }
}
