#![warn(
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
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

pub mod import;
mod manager;
mod materialize;
pub mod storage;

pub use import::{StrippedEntry, parse_stripped_line, read_stripped};
pub use manager::CatalogManager;
pub use materialize::TermStatsMaterializer;
pub use storage::DatabaseSequenceRepo;

// Re-export so callers holding a manager do not need seqstat_core for the
// lookup constant.
pub use seqstat_core::DEFAULT_LOOKUP_LIMIT;
