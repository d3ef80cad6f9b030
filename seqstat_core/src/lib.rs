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

pub mod entry;
pub mod error;
pub mod materialize;
pub mod repo;
pub mod util;

pub use entry::{DerivedData, SequenceEntry, TERM_DELIMITER, canonical_join};
pub use error::{CatalogError, CatalogResult, PersistFailurePolicy};
pub use materialize::Materializer;
pub use repo::{DEFAULT_LOOKUP_LIMIT, SequenceRepo};
pub use util::term_fingerprint;
