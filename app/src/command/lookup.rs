//! Prefix lookup of catalog sequences.

use seqstat_config::Config;
use seqstat_stats::extract_numbers;
use tracing::info;

/// Input parameters for the Lookup command strategy.
#[derive(Debug, Clone)]
pub struct LookupInput {
    /// Free-form query text; its numeric tokens become the prefix terms
    pub query: String,
    /// Optional override of the configured match limit
    pub limit: Option<u64>,
}

/// Strategy for looking up sequences by term prefix.
///
/// Harvests the numeric tokens from the query text with the same extractor
/// the stats command uses, then asks the catalog for sequences starting
/// with exactly those terms. Every printed match carries its derived data.
///
/// # Design
/// - Zero-allocation: No heap allocation beyond what business logic requires
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state, all input via `LookupInput`
#[derive(Debug, Clone, Copy)]
pub struct LookupStrategy;

impl super::CommandStrategy for LookupStrategy {
    type Input = LookupInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let terms = extract_numbers(&input.query);
        if terms.is_empty() {
            println!("No numeric terms in query");
            return Ok(());
        }

        let config = Config::load()?;
        let manager = super::init_catalog(&config).await?;
        let limit = input.limit.unwrap_or(config.catalog.lookup_limit);

        info!("Looking up sequences with prefix {terms:?}");
        let entries = manager.find_by_prefix(&terms, limit).await?;

        if entries.is_empty() {
            println!("No catalog sequence starts with {}", terms.join(", "));
            return Ok(());
        }
        for entry in &entries {
            super::print_entry(entry);
        }
        Ok(())
    }
}
