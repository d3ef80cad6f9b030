//! Single-sequence fetch by external id.

use seqstat_config::Config;
use tracing::info;

/// Input parameters for the Get command strategy.
#[derive(Debug, Clone)]
pub struct GetInput {
    /// External identifier, e.g. `A000045`
    pub a_id: String,
}

/// Strategy for fetching one catalog sequence.
///
/// A missing id and a duplicated id both surface as errors; the latter is a
/// catalog-integrity problem the user should see.
///
/// # Design
/// - Zero-allocation: No heap allocation beyond what business logic requires
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state, all input via `GetInput`
#[derive(Debug, Clone, Copy)]
pub struct GetStrategy;

impl super::CommandStrategy for GetStrategy {
    type Input = GetInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let manager = super::init_catalog(&config).await?;

        info!("Fetching sequence {}", input.a_id);
        let entry = manager.find_by_a_id(&input.a_id).await?;

        super::print_entry(&entry);
        Ok(())
    }
}
