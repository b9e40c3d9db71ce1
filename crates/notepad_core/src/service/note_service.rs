//! Note use-case operations.
//!
//! # Responsibility
//! - Create, edit and delete notes on an in-memory `NoteCollection`.
//! - Report what happened so callers can update views and selection.
//!
//! # Invariants
//! - Creation never overwrites an existing title.
//! - Deleting the last note resets the collection to the default entry.
//! - Operations never persist; callers save after each mutation.

use crate::model::note::{NoteCollection, DEFAULT_NOTE_TITLE};
use log::{info, warn};

/// Result of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Title was missing or blank; nothing changed.
    Cancelled,
    /// A new empty note was inserted.
    Created(String),
    /// The title already existed; nothing changed besides selection.
    Existing(String),
}

impl CreateOutcome {
    /// Title to select after the request, when any.
    pub fn selection(&self) -> Option<&str> {
        match self {
            Self::Cancelled => None,
            Self::Created(title) | Self::Existing(title) => Some(title.as_str()),
        }
    }

    /// Whether the collection changed and must be saved.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Result of a confirmed delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Whether the requested title was present and removed.
    pub removed: bool,
    /// Whether the collection was reset to the default entry.
    pub reset: bool,
    /// Title to select after deletion.
    pub selection: String,
}

/// Inserts an empty note named `title` unless it is blank or already present.
pub fn create_note(collection: &mut NoteCollection, title: &str) -> CreateOutcome {
    if title.trim().is_empty() {
        info!("event=note_create module=service status=cancelled");
        return CreateOutcome::Cancelled;
    }

    if collection.insert_new(title, "") {
        info!(
            "event=note_create module=service status=ok title_len={} count={}",
            title.chars().count(),
            collection.len()
        );
        CreateOutcome::Created(title.to_string())
    } else {
        info!(
            "event=note_create module=service status=existing title_len={}",
            title.chars().count()
        );
        CreateOutcome::Existing(title.to_string())
    }
}

/// Replaces the body of `title`.
///
/// Returns `false` without changing anything when `title` is not a key.
pub fn edit_note(collection: &mut NoteCollection, title: &str, body: &str) -> bool {
    let updated = collection.set_body(title, body);
    if !updated {
        warn!(
            "event=note_edit module=service status=skipped reason=unknown_title title_len={}",
            title.chars().count()
        );
    }
    updated
}

/// Removes `title`, restoring the default entry when nothing remains.
///
/// Confirmation is resolved by the caller before this is invoked.
pub fn delete_note(collection: &mut NoteCollection, title: &str) -> DeleteOutcome {
    let removed = collection.remove(title).is_some();
    let reset = collection.is_empty();
    if reset {
        collection.reset_to_default();
    }

    let selection = collection
        .first_title()
        .unwrap_or(DEFAULT_NOTE_TITLE)
        .to_string();

    info!(
        "event=note_delete module=service status={} reset={} count={}",
        if removed { "ok" } else { "missing" },
        reset,
        collection.len()
    );

    DeleteOutcome {
        removed,
        reset,
        selection,
    }
}

#[cfg(test)]
mod tests {
    use super::{create_note, delete_note, edit_note, CreateOutcome};
    use crate::model::note::NoteCollection;

    #[test]
    fn blank_title_is_cancelled() {
        let mut collection = NoteCollection::default();
        assert_eq!(create_note(&mut collection, "   \t"), CreateOutcome::Cancelled);
        assert!(collection.is_default());
    }

    #[test]
    fn title_is_stored_as_entered() {
        let mut collection = NoteCollection::default();
        let outcome = create_note(&mut collection, " Padded ");
        assert_eq!(outcome.selection(), Some(" Padded "));
        assert!(collection.contains(" Padded "));
        assert!(!collection.contains("Padded"));
    }

    #[test]
    fn edit_of_unknown_title_is_noop() {
        let mut collection = NoteCollection::default();
        assert!(!edit_note(&mut collection, "Missing", "body"));
        assert!(!collection.contains("Missing"));
    }

    #[test]
    fn delete_of_unknown_title_keeps_collection() {
        let mut collection = NoteCollection::from_pairs([("A", "x")]).unwrap();
        let outcome = delete_note(&mut collection, "Missing");
        assert!(!outcome.removed);
        assert!(!outcome.reset);
        assert_eq!(outcome.selection, "A");
        assert_eq!(collection.get("A"), Some("x"));
    }
}
