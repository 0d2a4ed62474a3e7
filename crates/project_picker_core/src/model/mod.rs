//! Domain model for project entries and their tag-like attributes.
//!
//! # Responsibility
//! - Define the canonical `Entry` record and the `Level` enumeration.
//! - Validate entry drafts against store configuration before any write.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - Level values are always drawn from the fixed `1|2|3` enumeration.
//! - Category names are trimmed and never blank.

pub mod entry;
pub mod level;
