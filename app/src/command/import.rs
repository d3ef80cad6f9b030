//! Catalog import from stripped-format files.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use seqstat_catalog::read_stripped;
use seqstat_config::Config;
use tracing::info;

/// Input parameters for the Import command strategy.
#[derive(Debug, Clone)]
pub struct ImportInput {
    /// Path to the stripped-format file
    pub path: PathBuf,
}

/// Strategy for loading sequences into the catalog.
///
/// Re-imported ids get their terms replaced and stored derived data
/// cleared.
///
/// # Design
/// - Zero-allocation: No heap allocation beyond what business logic requires
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state, all input via `ImportInput`
#[derive(Debug, Clone, Copy)]
pub struct ImportStrategy;

impl super::CommandStrategy for ImportStrategy {
    type Input = ImportInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        info!("Reading stripped file {}", input.path.display());
        let file = File::open(&input.path)?;
        let entries = read_stripped(BufReader::new(file))?;

        let config = Config::load()?;
        let manager = super::init_catalog(&config).await?;

        let imported = manager.import_entries(&entries).await?;
        println!(
            "Parsed {} entries from {}, imported {imported}",
            entries.len(),
            input.path.display()
        );
        Ok(())
    }
}
