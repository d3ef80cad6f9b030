//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type, enabling
//! compile-time optimization and zero runtime overhead. Shared wiring for
//! catalog-backed commands lives here.

use seqstat_catalog::CatalogManager;
use seqstat_config::Config;
use seqstat_core::SequenceEntry;
use tracing::info;

mod get;
mod import;
mod info;
mod init;
mod lookup;
mod stats;
mod version;

pub use get::{GetInput, GetStrategy};
pub use import::{ImportInput, ImportStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use lookup::{LookupInput, LookupStrategy};
pub use stats::{StatsInput, StatsStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Zero allocation**: No heap allocation required
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
/// - **Extensibility**: Adding new commands requires only implementing this trait
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Connect a catalog manager configured from the loaded config.
pub(crate) async fn init_catalog(config: &Config) -> anyhow::Result<CatalogManager> {
    info!("Connecting to catalog database");
    let manager = CatalogManager::connect(&config.database.url)
        .await?
        .with_persist_failure(config.catalog.on_persist_failure);
    Ok(manager)
}

/// Print one catalog entry with its derived data.
pub(crate) fn print_entry(entry: &SequenceEntry) {
    let shown = entry
        .terms
        .iter()
        .take(10)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let suffix = if entry.terms.len() > 10 { ", ..." } else { "" };
    println!("{}: {shown}{suffix}", entry.a_id);

    if let Some(data) = &entry.data {
        println!("  terms:   {}", data.term_count);
        if let (Some(min), Some(max)) = (data.minimum, data.maximum) {
            println!("  range:   {min} .. {max}");
        }
        println!("  median:  {}", data.median);
        println!("  average: {}", data.average);
    }
}
