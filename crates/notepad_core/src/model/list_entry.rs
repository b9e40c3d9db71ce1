//! List projection of note titles.
//!
//! # Responsibility
//! - Derive the element identifier that addresses a rendered list row.
//! - Keep the identifier next to its title so it is computed exactly once.
//!
//! # Invariants
//! - `element_id == sanitize_identifier(title)` for every entry.
//! - Entry order mirrors the owning `NoteCollection`.
//! - Two titles may share an element id; lookups by id return the first row.

use crate::model::note::NoteCollection;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid identifier regex"));

/// Strips every non-word character (whitespace included) and lowercases.
///
/// Word characters are ASCII `[A-Za-z0-9_]`, so non-ASCII letters are removed.
pub fn sanitize_identifier(title: &str) -> String {
    NON_IDENTIFIER_RE
        .replace_all(title, "")
        .to_ascii_lowercase()
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    title: String,
    element_id: String,
}

impl ListEntry {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let element_id = sanitize_identifier(&title);
        Self { title, element_id }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }
}

/// Ordered list rows shown next to the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListView {
    entries: Vec<ListEntry>,
}

impl NoteListView {
    pub fn from_collection(collection: &NoteCollection) -> Self {
        let mut view = Self::default();
        for title in collection.titles() {
            view.push(title);
        }
        view
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(ListEntry::title)
    }

    /// Appends a row for `title` and returns it.
    pub fn push(&mut self, title: &str) -> &ListEntry {
        let entry = ListEntry::new(title);
        if self.find_by_element_id(entry.element_id()).is_some() {
            warn!(
                "event=list_entry_add module=model status=collision element_id_len={}",
                entry.element_id().len()
            );
        }
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Removes the row whose title equals `title`.
    pub fn remove_title(&mut self, title: &str) -> Option<ListEntry> {
        let index = self.entries.iter().position(|entry| entry.title == title)?;
        Some(self.entries.remove(index))
    }

    /// Returns the first row carrying `element_id`.
    pub fn find_by_element_id(&self, element_id: &str) -> Option<&ListEntry> {
        self.entries
            .iter()
            .find(|entry| entry.element_id == element_id)
    }
}
