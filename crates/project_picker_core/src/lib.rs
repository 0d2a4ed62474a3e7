//! Core domain logic for the project picker.
//! Holds the session record store, its category vocabulary, and the query
//! engine used by the random-entry finder.

pub mod config;
pub mod logging;
pub mod model;
pub mod projection;
pub mod query;
pub mod repo;
pub mod seed;
pub mod service;

pub use config::{Cardinality, CategoryRegistration, DescriptionPolicy, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entry::{AttributeField, Entry, EntryDraft, EntryId, EntryValidationError};
pub use model::level::{parse_levels, Level};
pub use projection::{table_rows, EntryRow};
pub use query::filter::{filter, FilterCriteria};
pub use query::random::{pick_random, pick_random_with};
pub use query::QueryError;
pub use repo::record_repo::{InMemoryRecordRepository, RecordRepository, RepoError, RepoResult};
pub use seed::{seed_entries, seeded_store};
pub use service::record_store::{EntrySelector, RecordStore, StoreError, StoreErrorKind};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
