//! Domain model for the note collection and its list projection.
//!
//! # Responsibility
//! - Define the canonical title-to-body mapping owned by core.
//! - Define the UI-facing list projection derived from titles.
//!
//! # Invariants
//! - A `NoteCollection` is never empty outside of internal mutation windows.
//! - Titles are unique keys; list entries mirror collection order.

pub mod list_entry;
pub mod note;
