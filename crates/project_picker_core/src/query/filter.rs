//! Multi-criteria entry filtering.
//!
//! Dimensions combine with AND; values inside one dimension combine with OR.
//! An absent or empty value set places no constraint on its dimension, the
//! same way an untouched multiselect does on the page.

use crate::model::entry::Entry;
use crate::model::level::Level;
use std::collections::BTreeSet;

/// Optional filter constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Acceptable money levels.
    pub money_in: Option<BTreeSet<Level>>,
    /// Acceptable time levels.
    pub time_in: Option<BTreeSet<Level>>,
    /// Entry must carry at least one of these categories.
    pub categories_any_of: Option<BTreeSet<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_money(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.money_in = Some(levels.into_iter().collect());
        self
    }

    pub fn with_time(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.time_in = Some(levels.into_iter().collect());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories_any_of = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Number of dimensions that actually constrain the result.
    pub fn active_count(&self) -> usize {
        [
            is_active(&self.money_in),
            is_active(&self.time_in),
            is_active(&self.categories_any_of),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }

    /// Returns whether one entry satisfies every active criterion.
    pub fn matches(&self, entry: &Entry) -> bool {
        intersects(&self.money_in, &entry.money_level)
            && intersects(&self.time_in, &entry.time_level)
            && intersects(&self.categories_any_of, &entry.categories)
    }
}

/// Returns the entries matching `criteria`, in their original order.
pub fn filter<'a>(entries: &'a [Entry], criteria: &FilterCriteria) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| criteria.matches(entry))
        .collect()
}

fn is_active<T>(wanted: &Option<BTreeSet<T>>) -> bool {
    wanted.as_ref().is_some_and(|values| !values.is_empty())
}

fn intersects<T: Ord>(wanted: &Option<BTreeSet<T>>, actual: &BTreeSet<T>) -> bool {
    match wanted {
        Some(values) if !values.is_empty() => !values.is_disjoint(actual),
        _ => true,
    }
}
