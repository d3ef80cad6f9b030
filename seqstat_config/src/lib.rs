#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod schema;

pub use schema::{CatalogConfig, Config, DatabaseConfig};

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

impl Config {
    /// Path of the user configuration file: `~/seqstat/config.json`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join("seqstat").join("config.json"))
    }

    /// Load the configuration file. Missing keys fall back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        let raw = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config at {}; run `seqstat init` first",
                path.display()
            )
        })?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Malformed config at {}", path.display()))
    }

    /// Write the default configuration file unless one already exists.
    pub fn create_config() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            println!("Config already exists: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(&Self::default())?)?;

        info!("Created default config at {}", path.display());
        println!("Created config: {}", path.display());
        Ok(())
    }
}
