//! Entry domain model.
//!
//! # Responsibility
//! - Define the project record held by the record store.
//! - Define the write-side draft shape and its validation rules.
//!
//! # Invariants
//! - `id` is stable for the entry lifetime and never reused.
//! - `title` is trimmed and non-blank after any successful write.
//! - Level and category sets never exceed the configured cardinality.

use crate::config::{Cardinality, DescriptionPolicy, StoreConfig};
use crate::model::level::Level;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable surrogate identifier assigned to every entry at creation.
pub type EntryId = Uuid;

/// Multi-valued entry dimension, used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeField {
    Money,
    Time,
    Categories,
}

impl AttributeField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Money => "money_level",
            Self::Time => "time_level",
            Self::Categories => "categories",
        }
    }
}

/// Validation failure for entry writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Title is empty or whitespace only.
    BlankTitle,
    /// Description is blank while the store requires one.
    BlankDescription,
    /// A category name is empty or whitespace only.
    BlankCategory,
    /// Raw level input outside `1|2|3`.
    UnknownLevel(String),
    /// More values than the configured cardinality allows.
    TooManyValues { field: AttributeField, count: usize },
    /// Category is not part of the vocabulary and auto-registration is off.
    UnknownCategory(String),
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title must not be blank"),
            Self::BlankDescription => write!(f, "description must not be blank"),
            Self::BlankCategory => write!(f, "category name must not be blank"),
            Self::UnknownLevel(value) => {
                write!(f, "unknown level `{value}`; expected 1|2|3")
            }
            Self::TooManyValues { field, count } => write!(
                f,
                "{} accepts a single value, got {count}",
                field.as_str()
            ),
            Self::UnknownCategory(name) => write!(f, "unknown category: `{name}`"),
        }
    }
}

impl Error for EntryValidationError {}

/// Write-side field values for create and full-replace update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub description: String,
    pub money_level: BTreeSet<Level>,
    pub time_level: BTreeSet<Level>,
    pub categories: BTreeSet<String>,
}

impl EntryDraft {
    /// Creates a draft with only a title; every other field starts empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_money(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.money_level = levels.into_iter().collect();
        self
    }

    pub fn with_time(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.time_level = levels.into_iter().collect();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Trims title and category names. Description text is kept verbatim.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            categories: self
                .categories
                .into_iter()
                .map(|name| name.trim().to_string())
                .collect(),
            ..self
        }
    }

    /// Validates field-level rules that do not depend on the vocabulary.
    ///
    /// # Errors
    /// - `BlankTitle` / `BlankDescription` / `BlankCategory` for empty input.
    /// - `TooManyValues` when scalar cardinality is exceeded.
    pub fn validate(&self, config: &StoreConfig) -> Result<(), EntryValidationError> {
        if self.title.trim().is_empty() {
            return Err(EntryValidationError::BlankTitle);
        }
        if config.description == DescriptionPolicy::Required
            && self.description.trim().is_empty()
        {
            return Err(EntryValidationError::BlankDescription);
        }
        if self.categories.iter().any(|name| name.trim().is_empty()) {
            return Err(EntryValidationError::BlankCategory);
        }

        check_counts(
            config.cardinality,
            [
                (AttributeField::Money, self.money_level.len()),
                (AttributeField::Time, self.time_level.len()),
                (AttributeField::Categories, self.categories.len()),
            ],
        )
    }

    /// Drops values beyond the cardinality bound, keeping the lowest ones.
    pub fn limited_to(self, cardinality: Cardinality) -> Self {
        let Some(max) = cardinality.max_values() else {
            return self;
        };
        Self {
            money_level: self.money_level.into_iter().take(max).collect(),
            time_level: self.time_level.into_iter().take(max).collect(),
            categories: self.categories.into_iter().take(max).collect(),
            ..self
        }
    }
}

fn check_counts(
    cardinality: Cardinality,
    counts: [(AttributeField, usize); 3],
) -> Result<(), EntryValidationError> {
    let Some(max) = cardinality.max_values() else {
        return Ok(());
    };
    match counts.into_iter().find(|(_, count)| *count > max) {
        Some((field, count)) => Err(EntryValidationError::TooManyValues { field, count }),
        None => Ok(()),
    }
}

/// One project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    /// Free text, possibly empty.
    pub description: String,
    pub money_level: BTreeSet<Level>,
    pub time_level: BTreeSet<Level>,
    pub categories: BTreeSet<String>,
}

impl Entry {
    /// Creates an entry from a draft with a freshly generated id.
    ///
    /// Does not validate; callers go through the record store for that.
    pub fn new(draft: EntryDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    pub fn with_id(id: EntryId, draft: EntryDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            money_level: draft.money_level,
            time_level: draft.time_level,
            categories: draft.categories,
        }
    }

    /// Replaces every field except `id`.
    pub fn apply(&mut self, draft: EntryDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.money_level = draft.money_level;
        self.time_level = draft.time_level;
        self.categories = draft.categories;
    }

    /// Returns the editable fields as a draft, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            money_level: self.money_level.clone(),
            time_level: self.time_level.clone(),
            categories: self.categories.clone(),
        }
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    /// Checks the stored value sets against a cardinality bound.
    pub fn check_cardinality(
        &self,
        cardinality: Cardinality,
    ) -> Result<(), EntryValidationError> {
        check_counts(
            cardinality,
            [
                (AttributeField::Money, self.money_level.len()),
                (AttributeField::Time, self.time_level.len()),
                (AttributeField::Categories, self.categories.len()),
            ],
        )
    }
}
