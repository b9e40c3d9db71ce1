//! Notepad controller.
//!
//! # Responsibility
//! - Hold the explicit application state: collection, list view, selection
//!   and editor text.
//! - Handle host events (new, delete, input, select) with injected storage
//!   and prompter collaborators.
//!
//! # Invariants
//! - `selection` is always a key of `notes`.
//! - `editor_text` equals the body stored under `selection` after every handler.
//! - `list` titles equal `notes` titles in order.
//! - Every mutation is saved before the handler returns.

use crate::model::list_entry::NoteListView;
use crate::model::note::{NoteCollection, DEFAULT_NOTE_TITLE};
use crate::repo::storage_repo::{LocalStorage, RepoError};
use crate::service::note_service::{
    create_note, delete_note, edit_note, CreateOutcome, DeleteOutcome,
};
use crate::service::note_store::{LoadSource, NoteStore};
use crate::service::prompt::{Notice, PromptDecision, PromptRequest, Prompter};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned by controller handlers.
#[derive(Debug)]
pub enum ControllerError {
    /// Selection target is not a note title.
    UnknownNote(String),
    /// Persisting the collection failed; memory state is already updated.
    Storage(RepoError),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNote(title) => write!(f, "no note titled `{title}`"),
            Self::Storage(err) => write!(f, "failed to save notes: {err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownNote(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<RepoError> for ControllerError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Session controller binding a host UI to the note store.
pub struct NotepadController<S: LocalStorage, P: Prompter> {
    store: NoteStore<S>,
    prompter: P,
    notes: NoteCollection,
    list: NoteListView,
    selection: String,
    editor_text: String,
    load_source: LoadSource,
}

impl<S: LocalStorage, P: Prompter> NotepadController<S, P> {
    /// Loads the persisted collection and selects its first note.
    pub fn start(store: NoteStore<S>, prompter: P) -> Self {
        let (notes, load_source) = store.load_with_source();
        let list = NoteListView::from_collection(&notes);
        let selection = notes
            .first_title()
            .unwrap_or(DEFAULT_NOTE_TITLE)
            .to_string();

        let mut controller = Self {
            store,
            prompter,
            notes,
            list,
            selection,
            editor_text: String::new(),
            load_source,
        };
        controller.refresh_editor();
        controller
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn list(&self) -> &NoteListView {
        &self.list
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    pub fn editor_text(&self) -> &str {
        &self.editor_text
    }

    /// How the collection was obtained at startup.
    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Handles the "new note" trigger.
    ///
    /// Asks for a name; a new title gets an empty note and a list row, an
    /// existing title is only selected, and a cancelled or blank answer
    /// changes nothing.
    pub fn new_note(&mut self) -> ControllerResult<CreateOutcome> {
        let decision = self.prompter.ask(&PromptRequest::NoteName);
        let outcome = match decision.as_value() {
            Some(title) => create_note(&mut self.notes, title),
            None => CreateOutcome::Cancelled,
        };

        if outcome.is_mutation() {
            if let Some(title) = outcome.selection() {
                self.list.push(title);
            }
            self.store.save(&self.notes)?;
        }
        if let Some(title) = outcome.selection() {
            self.selection = title.to_string();
            self.refresh_editor();
        }

        Ok(outcome)
    }

    /// Handles the "delete note" trigger for the current selection.
    ///
    /// Returns `Ok(None)` when the user did not type the confirmation keyword.
    pub fn delete_selected(&mut self) -> ControllerResult<Option<DeleteOutcome>> {
        let request = PromptRequest::DeleteConfirmation {
            title: self.selection.clone(),
        };
        let decision = self.prompter.ask(&request);
        if !decision.confirms_delete() {
            info!(
                "event=note_delete module=app status=unconfirmed cancelled={}",
                decision == PromptDecision::Cancelled
            );
            self.prompter.notify(Notice::NoteNotDeleted);
            return Ok(None);
        }

        let title = self.selection.clone();
        let outcome = delete_note(&mut self.notes, &title);
        if outcome.reset {
            self.list = NoteListView::from_collection(&self.notes);
        } else {
            self.list.remove_title(&title);
        }
        self.selection = outcome.selection.clone();
        self.refresh_editor();

        self.store.save(&self.notes)?;
        self.prompter.notify(Notice::NoteDeleted);
        Ok(Some(outcome))
    }

    /// Handles a change of the editor text for the current selection.
    pub fn input(&mut self, text: impl Into<String>) -> ControllerResult<()> {
        let text = text.into();
        edit_note(&mut self.notes, &self.selection, &text);
        self.editor_text = text;
        self.store.save(&self.notes)?;
        Ok(())
    }

    /// Handles a list selection change.
    pub fn select(&mut self, title: &str) -> ControllerResult<()> {
        if !self.notes.contains(title) {
            return Err(ControllerError::UnknownNote(title.to_string()));
        }
        self.selection = title.to_string();
        self.refresh_editor();
        Ok(())
    }

    /// Selects the row addressed by a list element id.
    pub fn select_element(&mut self, element_id: &str) -> ControllerResult<()> {
        let title = self
            .list
            .find_by_element_id(element_id)
            .map(|entry| entry.title().to_string())
            .ok_or_else(|| ControllerError::UnknownNote(element_id.to_string()))?;
        self.select(&title)
    }

    fn refresh_editor(&mut self) {
        self.editor_text = self
            .notes
            .get(&self.selection)
            .unwrap_or_default()
            .to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::{ControllerError, NotepadController};
    use crate::repo::storage_repo::MemoryLocalStorage;
    use crate::service::note_store::NoteStore;
    use crate::service::prompt::ScriptedPrompter;

    #[test]
    fn start_selects_first_note_and_fills_editor() {
        let storage = MemoryLocalStorage::with_item("notes", r#"{"First":"one","Second":"two"}"#);
        let controller = NotepadController::start(NoteStore::new(storage), ScriptedPrompter::new());
        assert_eq!(controller.selection(), "First");
        assert_eq!(controller.editor_text(), "one");
        assert_eq!(controller.list().len(), 2);
    }

    #[test]
    fn select_unknown_title_keeps_state() {
        let mut controller = NotepadController::start(
            NoteStore::new(MemoryLocalStorage::new()),
            ScriptedPrompter::new(),
        );
        let err = controller.select("Nope").unwrap_err();
        assert!(matches!(err, ControllerError::UnknownNote(_)));
        assert_eq!(controller.selection(), "To-Do List");
    }

    #[test]
    fn select_element_resolves_sanitized_id() {
        let storage = MemoryLocalStorage::with_item("notes", r#"{"A":"","Shopping List!":"milk"}"#);
        let mut controller =
            NotepadController::start(NoteStore::new(storage), ScriptedPrompter::new());
        controller.select_element("shoppinglist").unwrap();
        assert_eq!(controller.selection(), "Shopping List!");
        assert_eq!(controller.editor_text(), "milk");
    }
}
