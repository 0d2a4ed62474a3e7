//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered entry sequence and the sorted category vocabulary.
//! - Provide id-based entry access plus first-match title lookup.
//!
//! # Invariants
//! - Removing an entry compacts the sequence; no gaps remain.
//! - The vocabulary is a case-sensitive sorted set.
//! - The vocabulary is never rebuilt from entry contents after construction.

use crate::model::entry::{Entry, EntryId};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for id-based entry access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    EntryNotFound(EntryId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntryNotFound(id) => write!(f, "entry not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage contract for entries and the category vocabulary.
pub trait RecordRepository {
    /// Appends an entry at the end of the sequence.
    fn insert_entry(&mut self, entry: Entry) -> EntryId;
    /// Replaces the entry with the same id, keeping its position.
    fn replace_entry(&mut self, entry: Entry) -> RepoResult<()>;
    /// Removes one entry by id and returns it.
    fn remove_entry(&mut self, id: EntryId) -> RepoResult<Entry>;
    fn get_entry(&self, id: EntryId) -> Option<&Entry>;
    /// Returns the first entry whose title equals `title` exactly.
    fn find_by_title(&self, title: &str) -> Option<&Entry>;
    /// Full entry sequence in display order.
    fn list_entries(&self) -> &[Entry];
    /// Removes `name` from every entry's categories; returns affected count.
    fn strip_category(&mut self, name: &str) -> usize;
    /// Inserts a vocabulary name; returns `false` when it already existed.
    fn insert_category(&mut self, name: String) -> bool;
    /// Removes a vocabulary name; returns `false` when it was absent.
    fn remove_category(&mut self, name: &str) -> bool;
    fn has_category(&self, name: &str) -> bool;
    /// Vocabulary in sorted order.
    fn list_categories(&self) -> Vec<String>;
}

/// Session-lifetime repository backed by a `Vec` and a `BTreeSet`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordRepository {
    entries: Vec<Entry>,
    categories: BTreeSet<String>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from seed entries.
    ///
    /// The vocabulary starts as the union of all seed categories.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let categories = entries
            .iter()
            .flat_map(|entry| entry.categories.iter().cloned())
            .collect();
        Self {
            entries,
            categories,
        }
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn insert_entry(&mut self, entry: Entry) -> EntryId {
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    fn replace_entry(&mut self, entry: Entry) -> RepoResult<()> {
        let index = self
            .position(entry.id)
            .ok_or(RepoError::EntryNotFound(entry.id))?;
        self.entries[index] = entry;
        Ok(())
    }

    fn remove_entry(&mut self, id: EntryId) -> RepoResult<Entry> {
        let index = self.position(id).ok_or(RepoError::EntryNotFound(id))?;
        Ok(self.entries.remove(index))
    }

    fn get_entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn find_by_title(&self, title: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.title == title)
    }

    fn list_entries(&self) -> &[Entry] {
        &self.entries
    }

    fn strip_category(&mut self, name: &str) -> usize {
        self.entries
            .iter_mut()
            .map(|entry| entry.categories.remove(name))
            .filter(|removed| *removed)
            .count()
    }

    fn insert_category(&mut self, name: String) -> bool {
        self.categories.insert(name)
    }

    fn remove_category(&mut self, name: &str) -> bool {
        self.categories.remove(name)
    }

    fn has_category(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    fn list_categories(&self) -> Vec<String> {
        self.categories.iter().cloned().collect()
    }
}
