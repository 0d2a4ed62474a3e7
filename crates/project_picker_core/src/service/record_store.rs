//! Record store use-case service.
//!
//! # Responsibility
//! - Provide create/update/delete for entries and add/delete for categories.
//! - Resolve edit/delete targets by stable id or by first matching title.
//! - Expose read accessors, derived option lists and random picking.
//!
//! # Invariants
//! - Every entry write is normalized and validated before it reaches storage.
//! - Entry categories are a subset of the vocabulary at write time. Only
//!   `create_entry` under auto registration may extend the vocabulary.
//! - Every stored entry respects the configured cardinality, seeds included.
//! - `delete_category` cascades into every entry; entries left with no
//!   categories are kept.
//! - Log events carry ids and counts only, never user-entered text.

use crate::config::{CategoryRegistration, StoreConfig};
use crate::model::entry::{Entry, EntryDraft, EntryId, EntryValidationError};
use crate::model::level::Level;
use crate::query::filter::{filter, FilterCriteria};
use crate::query::options;
use crate::query::random::pick_random_with;
use crate::query::QueryError;
use crate::repo::record_repo::{InMemoryRecordRepository, RecordRepository, RepoError};
use log::{debug, info, warn};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifies the target of an edit or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelector {
    Id(EntryId),
    /// First entry whose title equals this value (after trimming).
    Title(String),
}

impl From<EntryId> for EntrySelector {
    fn from(value: EntryId) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for EntrySelector {
    fn from(value: &str) -> Self {
        Self::Title(value.to_string())
    }
}

impl From<String> for EntrySelector {
    fn from(value: String) -> Self {
        Self::Title(value)
    }
}

impl Display for EntrySelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Title(title) => write!(f, "title `{title}`"),
        }
    }
}

/// Coarse error classes surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Validation,
    NotFound,
    Duplicate,
    EmptyResult,
}

impl StoreErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Duplicate => "duplicate",
            Self::EmptyResult => "empty_result",
        }
    }
}

/// Service error for record store use-cases. Every variant is
/// recoverable by corrected user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Entry or category input failed validation.
    Validation(EntryValidationError),
    /// No entry matches the selector.
    EntryNotFound(EntrySelector),
    /// Category is not part of the vocabulary.
    CategoryNotFound(String),
    /// Category already exists in the vocabulary.
    DuplicateCategory(String),
    /// Random pick over an empty match set.
    EmptyResult,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::Validation(_) => StoreErrorKind::Validation,
            Self::EntryNotFound(_) | Self::CategoryNotFound(_) => StoreErrorKind::NotFound,
            Self::DuplicateCategory(_) => StoreErrorKind::Duplicate,
            Self::EmptyResult => StoreErrorKind::EmptyResult,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::EntryNotFound(selector) => write!(f, "entry not found: {selector}"),
            Self::CategoryNotFound(name) => write!(f, "category not found: `{name}`"),
            Self::DuplicateCategory(name) => write!(f, "category already exists: `{name}`"),
            Self::EmptyResult => write!(f, "{}", QueryError::EmptyResult),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntryValidationError> for StoreError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::EntryNotFound(id) => Self::EntryNotFound(EntrySelector::Id(id)),
        }
    }
}

impl From<QueryError> for StoreError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::EmptyResult => Self::EmptyResult,
        }
    }
}

/// Session-scoped record store over a repository implementation.
pub struct RecordStore<R: RecordRepository = InMemoryRecordRepository> {
    repo: R,
    config: StoreConfig,
}

impl RecordStore<InMemoryRecordRepository> {
    /// Creates an empty store with an empty vocabulary.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_repository(config, InMemoryRecordRepository::new())
    }

    /// Creates a store from seed entries.
    ///
    /// The vocabulary is the sorted union of all seed categories. Seed entries
    /// are checked against the configured cardinality only; other field rules
    /// apply to later writes.
    ///
    /// # Errors
    /// - `Validation(TooManyValues)` when a seed entry holds more values than
    ///   the cardinality allows.
    pub fn with_seed(config: StoreConfig, entries: Vec<Entry>) -> Result<Self, StoreError> {
        for entry in &entries {
            entry
                .check_cardinality(config.cardinality)
                .map_err(|err| rejected("store_seed", err.into()))?;
        }

        let store =
            Self::with_repository(config, InMemoryRecordRepository::from_entries(entries));
        info!(
            "event=store_seed module=store status=ok entries={} categories={}",
            store.entry_count(),
            store.repo.list_categories().len()
        );
        Ok(store)
    }
}

impl<R: RecordRepository> RecordStore<R> {
    /// Creates a store over the provided repository implementation.
    pub fn with_repository(config: StoreConfig, repo: R) -> Self {
        Self { repo, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Full entry sequence in display order.
    pub fn entries(&self) -> &[Entry] {
        self.repo.list_entries()
    }

    pub fn entry_count(&self) -> usize {
        self.repo.list_entries().len()
    }

    /// Category vocabulary, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.repo.list_categories()
    }

    pub fn get_entry(&self, selector: impl Into<EntrySelector>) -> Option<&Entry> {
        match selector.into() {
            EntrySelector::Id(id) => self.repo.get_entry(id),
            EntrySelector::Title(title) => self.repo.find_by_title(title.trim()),
        }
    }

    /// Appends a new entry built from `draft`.
    ///
    /// # Errors
    /// - `Validation` for blank title/category, a required description left
    ///   blank, too many values for scalar cardinality, or an unknown category
    ///   under explicit registration.
    ///
    /// Under auto registration, unknown categories join the vocabulary once
    /// the rest of the draft is known to be valid.
    pub fn create_entry(&mut self, draft: EntryDraft) -> Result<Entry, StoreError> {
        let (draft, unknown) = self
            .prepare_draft(draft)
            .map_err(|err| rejected("entry_create", err))?;
        for name in unknown {
            self.repo.insert_category(name);
            info!("event=category_add module=store status=ok source=entry_create");
        }

        let entry = Entry::new(draft);
        let created = entry.clone();
        let entry_id = self.repo.insert_entry(entry);
        info!(
            "event=entry_create module=store status=ok entry_id={entry_id} categories={}",
            created.categories.len()
        );
        Ok(created)
    }

    /// Replaces every field of the selected entry, keeping id and position.
    ///
    /// # Errors
    /// - `EntryNotFound` when the selector matches nothing.
    /// - `Validation` under the same rules as [`Self::create_entry`], except
    ///   that unknown categories are rejected under every registration mode.
    pub fn update_entry(
        &mut self,
        selector: impl Into<EntrySelector>,
        draft: EntryDraft,
    ) -> Result<Entry, StoreError> {
        let entry_id = self
            .resolve(selector.into())
            .map_err(|err| rejected("entry_update", err))?;
        let (draft, unknown) = self
            .prepare_draft(draft)
            .map_err(|err| rejected("entry_update", err))?;
        if let Some(name) = unknown.into_iter().next() {
            return Err(rejected(
                "entry_update",
                EntryValidationError::UnknownCategory(name).into(),
            ));
        }

        let updated = Entry::with_id(entry_id, draft);
        self.repo.replace_entry(updated.clone())?;
        info!("event=entry_update module=store status=ok entry_id={entry_id}");
        Ok(updated)
    }

    /// Removes the selected entry and returns it.
    pub fn delete_entry(&mut self, selector: impl Into<EntrySelector>) -> Result<Entry, StoreError> {
        let entry_id = self
            .resolve(selector.into())
            .map_err(|err| rejected("entry_delete", err))?;
        let removed = self.repo.remove_entry(entry_id)?;
        info!(
            "event=entry_delete module=store status=ok entry_id={entry_id} remaining={}",
            self.entry_count()
        );
        Ok(removed)
    }

    /// Adds a category to the vocabulary and returns the stored (trimmed) name.
    ///
    /// # Errors
    /// - `Validation(BlankCategory)` for blank input.
    /// - `DuplicateCategory` when the name already exists (case-sensitive).
    pub fn add_category(&mut self, name: impl Into<String>) -> Result<String, StoreError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(rejected(
                "category_add",
                EntryValidationError::BlankCategory.into(),
            ));
        }
        if !self.repo.insert_category(name.clone()) {
            return Err(rejected("category_add", StoreError::DuplicateCategory(name)));
        }
        info!(
            "event=category_add module=store status=ok vocabulary_size={}",
            self.repo.list_categories().len()
        );
        Ok(name)
    }

    /// Removes a category from the vocabulary and from every entry using it.
    ///
    /// Returns how many entries lost the category.
    pub fn delete_category(&mut self, name: &str) -> Result<usize, StoreError> {
        let name = name.trim();
        if !self.repo.has_category(name) {
            return Err(rejected(
                "category_delete",
                StoreError::CategoryNotFound(name.to_string()),
            ));
        }

        let affected = self.repo.strip_category(name);
        if affected > 0 {
            warn!("event=category_delete module=store status=cascade affected_entries={affected}");
        }
        self.repo.remove_category(name);
        info!(
            "event=category_delete module=store status=ok affected_entries={affected} vocabulary_size={}",
            self.repo.list_categories().len()
        );
        Ok(affected)
    }

    /// Number of entries currently carrying `name`.
    pub fn category_usage(&self, name: &str) -> usize {
        options::category_usage(self.entries(), name.trim())
    }

    /// Distinct money levels present in current entries.
    pub fn money_options(&self) -> Vec<Level> {
        options::money_options(self.entries())
    }

    /// Distinct time levels present in current entries.
    pub fn time_options(&self) -> Vec<Level> {
        options::time_options(self.entries())
    }

    /// Entries matching `criteria`, in display order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Entry> {
        let matches = filter(self.entries(), criteria);
        debug!(
            "event=entry_filter module=query status=ok active_criteria={} matches={}",
            criteria.active_count(),
            matches.len()
        );
        matches
    }

    /// Filters, then draws one match uniformly at random.
    pub fn pick_random_entry(&self, criteria: &FilterCriteria) -> Result<&Entry, StoreError> {
        self.pick_random_entry_with(&mut rand::rng(), criteria)
    }

    /// Same as [`Self::pick_random_entry`] with a caller-provided generator.
    pub fn pick_random_entry_with<G>(
        &self,
        rng: &mut G,
        criteria: &FilterCriteria,
    ) -> Result<&Entry, StoreError>
    where
        G: Rng + ?Sized,
    {
        let matches = self.filter(criteria);
        let picked =
            pick_random_with(rng, &matches).map_err(|err| rejected("entry_pick", err.into()))?;
        debug!(
            "event=entry_pick module=query status=ok entry_id={} candidates={}",
            picked.id,
            matches.len()
        );
        Ok(*picked)
    }

    fn resolve(&self, selector: EntrySelector) -> Result<EntryId, StoreError> {
        let found = match &selector {
            EntrySelector::Id(id) => self.repo.get_entry(*id),
            EntrySelector::Title(title) => self.repo.find_by_title(title.trim()),
        };
        found
            .map(|entry| entry.id)
            .ok_or(StoreError::EntryNotFound(selector))
    }

    /// Normalizes and validates a draft and returns it with the categories
    /// missing from the vocabulary. Those are an error under explicit
    /// registration; the caller decides what to do with them otherwise.
    fn prepare_draft(&self, draft: EntryDraft) -> Result<(EntryDraft, Vec<String>), StoreError> {
        let draft = draft.normalized();
        draft.validate(&self.config)?;

        let unknown: Vec<String> = draft
            .categories
            .iter()
            .filter(|name| !self.repo.has_category(name))
            .cloned()
            .collect();

        if self.config.category_registration == CategoryRegistration::Explicit {
            if let Some(name) = unknown.into_iter().next() {
                return Err(EntryValidationError::UnknownCategory(name).into());
            }
            return Ok((draft, Vec::new()));
        }

        Ok((draft, unknown))
    }
}

fn rejected(event: &'static str, err: StoreError) -> StoreError {
    warn!(
        "event={event} module=store status=error error_code={}",
        err.kind().as_str()
    );
    err
}

#[cfg(test)]
mod tests {
    use super::{EntrySelector, RecordStore, StoreError, StoreErrorKind};
    use crate::config::StoreConfig;
    use crate::model::entry::{AttributeField, Entry, EntryDraft, EntryValidationError};
    use crate::model::level::Level;
    use uuid::Uuid;

    #[test]
    fn selector_conversions() {
        let id = Uuid::new_v4();
        assert_eq!(EntrySelector::from(id), EntrySelector::Id(id));
        assert_eq!(
            EntrySelector::from("Alpha"),
            EntrySelector::Title("Alpha".to_string())
        );
    }

    #[test]
    fn error_kinds_map_to_user_facing_classes() {
        assert_eq!(
            StoreError::from(EntryValidationError::BlankTitle).kind(),
            StoreErrorKind::Validation
        );
        assert_eq!(
            StoreError::CategoryNotFound("IT".into()).kind(),
            StoreErrorKind::NotFound
        );
        assert_eq!(
            StoreError::DuplicateCategory("IT".into()).kind(),
            StoreErrorKind::Duplicate
        );
        assert_eq!(StoreError::EmptyResult.kind(), StoreErrorKind::EmptyResult);
    }

    #[test]
    fn auto_registration_skips_vocabulary_on_invalid_draft() {
        let mut store = RecordStore::new(StoreConfig::scalar());
        let draft = EntryDraft::new("").with_categories(["Neu"]);
        assert!(store.create_entry(draft).is_err());
        assert!(store.categories().is_empty());
    }

    #[test]
    fn update_never_registers_categories() {
        let mut store = RecordStore::new(StoreConfig::scalar());
        store
            .create_entry(EntryDraft::new("Alpha").with_categories(["IT"]))
            .unwrap();

        let err = store
            .update_entry("Alpha", EntryDraft::new("Alpha").with_categories(["Neu"]))
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation(EntryValidationError::UnknownCategory("Neu".into()))
        );
        assert_eq!(store.categories(), vec!["IT"]);
        assert!(store.get_entry("Alpha").unwrap().has_category("IT"));
    }

    #[test]
    fn seed_rejects_entries_over_cardinality() {
        let seed = vec![Entry::new(
            EntryDraft::new("Beta").with_money([Level::Two, Level::Three]),
        )];
        let err = RecordStore::with_seed(StoreConfig::scalar(), seed).err();
        assert_eq!(
            err,
            Some(StoreError::Validation(EntryValidationError::TooManyValues {
                field: AttributeField::Money,
                count: 2,
            }))
        );
    }
}
