//! Core use-case services.
//!
//! # Responsibility
//! - Apply note mutations to a `NoteCollection` with typed outcomes.
//! - Mirror the collection to key-value storage.
//! - Define the request/response seam through which users make decisions.

pub mod note_service;
pub mod note_store;
pub mod prompt;
