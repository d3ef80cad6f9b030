use seqstat_catalog::CatalogManager;
use seqstat_config::Config;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// This strategy outputs detailed configuration including:
/// - Database URL (credentials masked) and connection status
/// - Catalog lookup defaults
///
/// # Design
/// - Zero-allocation: No heap allocation beyond what business logic requires
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== seqstat Configuration ===\n");

        println!("Database:");
        println!("  URL: {}", mask_database_url(&config.database.url));

        info!("Testing catalog connection");
        match CatalogManager::connect(&config.database.url).await {
            Ok(_) => {
                println!("  Status: Connected");
            }
            Err(e) => {
                println!("  Status: Connection failed");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Catalog:");
        println!("  Lookup Limit: {}", config.catalog.lookup_limit);
        println!("  On Persist Failure: {}", config.catalog.on_persist_failure);

        Ok(())
    }
}

/// Hide the password segment of a database URL.
fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let rest_start = scheme_end + 3;
    let Some(at) = url[rest_start..].find('@') else {
        return url.to_string();
    };
    let credentials = &url[rest_start..rest_start + at];
    let Some((user, _)) = credentials.split_once(':') else {
        return url.to_string();
    };

    format!("{}{user}:***{}", &url[..rest_start], &url[rest_start + at..])
}
