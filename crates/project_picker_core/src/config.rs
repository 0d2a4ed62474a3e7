//! Record store behavior switches.
//!
//! The page this core serves shipped in several variants (scalar vs.
//! multi-valued attributes, with or without category auto-registration).
//! Each variant is one `StoreConfig` value over the same store.

use serde::{Deserialize, Serialize};

/// How many values a money/time/category dimension may hold per entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// At most one value per dimension.
    Scalar,
    /// Any subset of the domain.
    #[default]
    Set,
}

impl Cardinality {
    /// Upper bound on values per dimension, `None` when unbounded.
    pub fn max_values(self) -> Option<usize> {
        match self {
            Self::Scalar => Some(1),
            Self::Set => None,
        }
    }
}

/// Whether entry creation may introduce categories missing from the vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryRegistration {
    /// Unknown categories are added to the vocabulary on entry creation.
    Auto,
    /// Unknown categories are rejected; use `add_category` first.
    #[default]
    Explicit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionPolicy {
    #[default]
    Optional,
    Required,
}

/// Store configuration. Defaults match the multi-valued page variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub cardinality: Cardinality,
    pub category_registration: CategoryRegistration,
    pub description: DescriptionPolicy,
}

impl StoreConfig {
    /// Scalar-attribute variant: one value per dimension, and a freshly typed
    /// category is registered as a side effect of entry creation.
    pub fn scalar() -> Self {
        Self {
            cardinality: Cardinality::Scalar,
            category_registration: CategoryRegistration::Auto,
            description: DescriptionPolicy::Optional,
        }
    }
}
