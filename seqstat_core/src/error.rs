use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced by catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no sequence found for id: {a_id}")]
    NotFound { a_id: String },

    #[error("{count} sequences share id {a_id}; catalog identifiers must be unique")]
    Ambiguous { a_id: String, count: usize },

    #[error("failed to persist derived data for {a_id}: {source}")]
    Persistence {
        a_id: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("catalog query failed: {0}")]
    Repo(#[from] anyhow::Error),
}

/// What a lookup does when committing freshly computed derived data fails.
///
/// Applied uniformly to the prefix and the single-id paths; the entry keeps
/// its in-memory data either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistFailurePolicy {
    /// Log the failure and return the entry anyway.
    #[default]
    Ignore,
    /// Abort the lookup with [`CatalogError::Persistence`].
    Propagate,
}

impl std::fmt::Display for PersistFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}

impl std::str::FromStr for PersistFailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "propagate" => Ok(Self::Propagate),
            _ => Err(anyhow::anyhow!("unknown persist failure policy: {s}")),
        }
    }
}
