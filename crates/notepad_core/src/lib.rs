//! Core domain logic for the notepad.
//! This crate owns the note collection, its persistence and the event
//! handlers a host UI binds to.

pub mod app;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use app::controller::{ControllerError, ControllerResult, NotepadController};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::list_entry::{sanitize_identifier, ListEntry, NoteListView};
pub use model::note::{Note, NoteCollection, DEFAULT_NOTE_TITLE};
pub use repo::storage_repo::{
    LocalStorage, MemoryLocalStorage, RepoError, RepoResult, SqliteLocalStorage,
};
pub use service::note_service::{create_note, delete_note, edit_note, CreateOutcome, DeleteOutcome};
pub use service::note_store::{LoadSource, NoteStore, DEFAULT_STORAGE_KEY};
pub use service::prompt::{
    Notice, PromptDecision, PromptRequest, Prompter, ScriptedPrompter,
    DELETE_CONFIRMATION_KEYWORD,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
