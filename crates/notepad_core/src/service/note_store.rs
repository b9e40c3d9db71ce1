//! Note persistence over key-value storage.
//!
//! # Responsibility
//! - Load the session `NoteCollection` from one storage key.
//! - Write the full collection back after every mutation.
//!
//! # Invariants
//! - `load` never fails; absent, empty, unreadable or malformed data yields
//!   the default collection.
//! - `save` replaces the stored value wholesale with a JSON object.

use crate::model::note::{decode_pairs, NoteCollection};
use crate::repo::storage_repo::{LocalStorage, RepoResult};
use log::{error, info, warn};

/// Storage key notes are persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Where a loaded collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from the stored value.
    Persisted,
    /// Nothing stored under the key.
    Absent,
    /// Stored object had no entries.
    Empty,
    /// Stored value was not an object of string values.
    Malformed,
    /// Storage read failed.
    Unreadable,
}

impl LoadSource {
    fn as_str(self) -> &'static str {
        match self {
            Self::Persisted => "persisted",
            Self::Absent => "absent",
            Self::Empty => "empty",
            Self::Malformed => "malformed",
            Self::Unreadable => "unreadable",
        }
    }
}

/// Owns the storage backend and key for one note collection.
#[derive(Debug)]
pub struct NoteStore<S: LocalStorage> {
    storage: S,
    key: String,
}

impl<S: LocalStorage> NoteStore<S> {
    /// Creates a store persisting under [`DEFAULT_STORAGE_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the persisted collection, falling back to the default.
    pub fn load(&self) -> NoteCollection {
        self.load_with_source().0
    }

    /// Like [`NoteStore::load`], also reporting why a fallback happened.
    pub fn load_with_source(&self) -> (NoteCollection, LoadSource) {
        let (collection, source) = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => decode_collection(&raw),
            Ok(None) => (NoteCollection::default(), LoadSource::Absent),
            Err(err) => {
                error!(
                    "event=notes_load module=service status=error error_code=storage_read_failed error={}",
                    err
                );
                (NoteCollection::default(), LoadSource::Unreadable)
            }
        };

        if source == LoadSource::Persisted {
            info!(
                "event=notes_load module=service status=ok count={}",
                collection.len()
            );
        } else {
            info!(
                "event=notes_load module=service status=fallback reason={}",
                source.as_str()
            );
        }

        (collection, source)
    }

    /// Serializes `collection` and overwrites the stored value.
    pub fn save(&mut self, collection: &NoteCollection) -> RepoResult<()> {
        let raw = serde_json::to_string(collection)?;
        match self.storage.set_item(&self.key, &raw) {
            Ok(()) => {
                info!(
                    "event=notes_save module=service status=ok count={} bytes={}",
                    collection.len(),
                    raw.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=notes_save module=service status=error error_code=storage_write_failed error={}",
                    err
                );
                Err(err)
            }
        }
    }
}

fn decode_collection(raw: &str) -> (NoteCollection, LoadSource) {
    match decode_pairs(raw) {
        Ok(pairs) => match NoteCollection::from_pairs(pairs) {
            Some(collection) => (collection, LoadSource::Persisted),
            None => (NoteCollection::default(), LoadSource::Empty),
        },
        Err(err) => {
            warn!(
                "event=notes_decode module=service status=error error_code=malformed_storage line={} column={}",
                err.line(),
                err.column()
            );
            (NoteCollection::default(), LoadSource::Malformed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadSource, NoteStore};
    use crate::model::note::NoteCollection;
    use crate::repo::storage_repo::{LocalStorage, MemoryLocalStorage};

    #[test]
    fn load_reports_each_fallback_reason() {
        let cases = [
            (None, LoadSource::Absent),
            (Some("{}"), LoadSource::Empty),
            (Some("null"), LoadSource::Malformed),
            (Some("[\"a\"]"), LoadSource::Malformed),
            (Some(r#"{"A": {"nested": true}}"#), LoadSource::Malformed),
            (Some("{not json"), LoadSource::Malformed),
        ];

        for (raw, expected) in cases {
            let storage = match raw {
                Some(value) => MemoryLocalStorage::with_item("notes", value),
                None => MemoryLocalStorage::new(),
            };
            let (collection, source) = NoteStore::new(storage).load_with_source();
            assert_eq!(source, expected, "raw value {raw:?}");
            assert!(collection.is_default());
        }
    }

    #[test]
    fn save_writes_under_configured_key_only() {
        let mut store = NoteStore::with_key(MemoryLocalStorage::new(), "custom");
        store.save(&NoteCollection::default()).unwrap();

        assert_eq!(
            store.storage().get_item("custom").unwrap().as_deref(),
            Some(r#"{"To-Do List":""}"#)
        );
        assert_eq!(store.storage().get_item("notes").unwrap(), None);
    }
}
