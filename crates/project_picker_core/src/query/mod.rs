//! Query engine over the current entry sequence.
//!
//! # Responsibility
//! - Filter entries by optional money/time/category criteria.
//! - Draw one uniform-random entry from a filtered set.
//! - Derive filter option lists from current data.
//!
//! # Invariants
//! - Every operation is a pure function of its inputs; nothing is cached.
//! - Filtering preserves relative order.

pub mod filter;
pub mod options;
pub mod random;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Query-layer error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// Random pick requested over an empty match set.
    EmptyResult,
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyResult => write!(f, "no entries match the current filters"),
        }
    }
}

impl Error for QueryError {}
