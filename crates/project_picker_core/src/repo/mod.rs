//! Repository layer for session-scoped record storage.
//!
//! # Responsibility
//! - Define the storage contract for entries and the category vocabulary.
//! - Keep raw sequence/set manipulation out of the service layer.
//!
//! # Invariants
//! - Repositories do not validate; the service validates before writing.
//! - Entry order is insertion order and survives in-place replacement.

pub mod record_repo;
