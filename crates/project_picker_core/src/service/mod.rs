//! Core use-case services.
//!
//! # Responsibility
//! - Turn repository primitives into validated record-store operations.
//! - Keep presentation layers decoupled from storage details.

pub mod record_store;
