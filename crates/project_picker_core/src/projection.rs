//! Display projection for the entry table and the random-pick card.
//!
//! # Invariants
//! - Multi-valued fields are joined with `", "` in sorted order.
//! - Empty values and empty descriptions render as `"-"`.

use crate::model::entry::Entry;
use serde::Serialize;

const EMPTY_CELL: &str = "-";

/// One table row with every field rendered as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    pub title: String,
    pub description: String,
    pub money_level: String,
    pub time_level: String,
    pub categories: String,
}

impl EntryRow {
    pub fn from_entry(entry: &Entry) -> Self {
        let description = if entry.description.trim().is_empty() {
            EMPTY_CELL.to_string()
        } else {
            entry.description.clone()
        };

        Self {
            title: entry.title.clone(),
            description,
            money_level: join_cell(entry.money_level.iter().map(|level| level.as_str())),
            time_level: join_cell(entry.time_level.iter().map(|level| level.as_str())),
            categories: join_cell(entry.categories.iter().map(String::as_str)),
        }
    }
}

/// Projects a whole entry sequence, keeping order.
pub fn table_rows<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<EntryRow> {
    entries.into_iter().map(EntryRow::from_entry).collect()
}

fn join_cell<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let joined = values.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        joined
    }
}
