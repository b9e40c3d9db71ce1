//! Note collection model.
//!
//! # Responsibility
//! - Hold the ordered title-to-body mapping for one session.
//! - Define the persisted JSON shape (a single object of string values).
//!
//! # Invariants
//! - Titles are unique; insertion order is preserved.
//! - Public constructors never yield an empty collection.
//! - Decoding a duplicate title keeps the first position and the last body.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

/// Title of the single entry a collection resets to.
pub const DEFAULT_NOTE_TITLE: &str = "To-Do List";

/// One title/body pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub body: String,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Ordered mapping from unique note title to note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl Default for NoteCollection {
    /// Returns `{"To-Do List": ""}`.
    fn default() -> Self {
        Self {
            notes: vec![Note::new(DEFAULT_NOTE_TITLE, "")],
        }
    }
}

impl NoteCollection {
    /// Builds a collection from ordered pairs.
    ///
    /// Returns `None` when `pairs` is empty, since an empty collection is not
    /// a valid state. Later duplicates overwrite the body of the first one.
    pub fn from_pairs<I, T, B>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (T, B)>,
        T: Into<String>,
        B: Into<String>,
    {
        let mut collection = Self { notes: Vec::new() };
        for (title, body) in pairs {
            collection.upsert(title.into(), body.into());
        }

        if collection.notes.is_empty() {
            None
        } else {
            Some(collection)
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always `false` for collections observed outside this crate.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Whether this collection equals the reset state.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    /// Returns the body stored under `title`.
    pub fn get(&self, title: &str) -> Option<&str> {
        self.position(title)
            .map(|index| self.notes[index].body.as_str())
    }

    pub fn first_title(&self) -> Option<&str> {
        self.notes.first().map(|note| note.title.as_str())
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.notes.iter().map(|note| note.title.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Inserts `title -> body` only when `title` is new. Returns whether it was inserted.
    pub(crate) fn insert_new(&mut self, title: &str, body: &str) -> bool {
        if self.contains(title) {
            return false;
        }
        self.notes.push(Note::new(title, body));
        true
    }

    /// Replaces the body of an existing title. Returns whether the title existed.
    pub(crate) fn set_body(&mut self, title: &str, body: &str) -> bool {
        match self.position(title) {
            Some(index) => {
                self.notes[index].body = body.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes `title`. Callers must restore the non-empty invariant.
    pub(crate) fn remove(&mut self, title: &str) -> Option<Note> {
        self.position(title).map(|index| self.notes.remove(index))
    }

    pub(crate) fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    fn upsert(&mut self, title: String, body: String) {
        match self.position(&title) {
            Some(index) => self.notes[index].body = body,
            None => self.notes.push(Note { title, body }),
        }
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.title == title)
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl Serialize for NoteCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.notes.len()))?;
        for note in &self.notes {
            map.serialize_entry(&note.title, &note.body)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NoteCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = deserializer.deserialize_map(NotePairsVisitor)?;
        Self::from_pairs(pairs)
            .ok_or_else(|| serde::de::Error::custom("note collection must not be empty"))
    }
}

/// Decodes the persisted JSON object into ordered pairs, allowing zero entries.
///
/// Used by the store so an empty object can be told apart from malformed data.
pub(crate) fn decode_pairs(raw: &str) -> serde_json::Result<Vec<(String, String)>> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    let pairs = (&mut deserializer).deserialize_map(NotePairsVisitor)?;
    deserializer.end()?;
    Ok(pairs)
}

struct NotePairsVisitor;

impl<'de> Visitor<'de> for NotePairsVisitor {
    type Value = Vec<(String, String)>;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("an object mapping note titles to note bodies")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((title, body)) = access.next_entry::<String, String>()? {
            pairs.push((title, body));
        }
        Ok(pairs)
    }
}
