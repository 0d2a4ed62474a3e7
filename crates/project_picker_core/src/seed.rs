//! Demo seed data loaded into a fresh session.

use crate::config::StoreConfig;
use crate::model::entry::{Entry, EntryDraft};
use crate::model::level::Level::{One, Three, Two};
use crate::service::record_store::{RecordStore, StoreError};

/// Returns the five demo projects shown on first page load.
///
/// Ids are generated on every call. Under scalar cardinality each dimension
/// keeps only its lowest value.
pub fn seed_entries(config: &StoreConfig) -> Vec<Entry> {
    vec![
        EntryDraft::new("Projekt Alpha")
            .with_description("Entwicklung einer neuen Webapplikation")
            .with_money([Three])
            .with_time([Three])
            .with_categories(["IT", "Entwicklung"]),
        EntryDraft::new("Projekt Beta")
            .with_money([Two, Three])
            .with_categories(["IT", "Datenbank"]),
        EntryDraft::new("Projekt Gamma")
            .with_description("Marketing-Kampagne für Q1")
            .with_time([Two])
            .with_categories(["Marketing"]),
        EntryDraft::new("Projekt Delta")
            .with_description("Schulung neuer Mitarbeiter")
            .with_money([One, Two])
            .with_time([One]),
        EntryDraft::new("Projekt Epsilon")
            .with_money([Three])
            .with_time([Two, Three])
            .with_categories(["IT", "Infrastruktur"]),
    ]
    .into_iter()
    .map(|draft| Entry::new(draft.limited_to(config.cardinality)))
    .collect()
}

/// Builds a session store preloaded with [`seed_entries`].
pub fn seeded_store(config: StoreConfig) -> Result<RecordStore, StoreError> {
    RecordStore::with_seed(config, seed_entries(&config))
}
