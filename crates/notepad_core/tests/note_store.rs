use notepad_core::db::{open_db, open_db_in_memory};
use notepad_core::{
    LoadSource, LocalStorage, MemoryLocalStorage, NoteCollection, NoteStore, SqliteLocalStorage,
};

fn sample_collection() -> NoteCollection {
    NoteCollection::from_pairs([
        ("To-Do List", ""),
        ("Groceries & stuff!", "milk\neggs"),
        ("  leading and trailing  ", "\"quoted\" \\ backslash"),
        ("Ünïcode ✓", "tab\tseparated"),
        ("", "empty title from older data"),
    ])
    .unwrap()
}

#[test]
fn save_then_load_in_fresh_session_reproduces_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notepad.db");
    let collection = sample_collection();

    {
        let conn = open_db(&path).unwrap();
        let mut store = NoteStore::new(SqliteLocalStorage::try_new(&conn).unwrap());
        store.save(&collection).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = NoteStore::new(SqliteLocalStorage::try_new(&conn).unwrap());
    let (loaded, source) = store.load_with_source();

    assert_eq!(source, LoadSource::Persisted);
    assert_eq!(loaded, collection);
    assert_eq!(
        loaded.titles().collect::<Vec<_>>(),
        collection.titles().collect::<Vec<_>>()
    );
}

#[test]
fn save_replaces_previous_value_wholesale() {
    let mut store = NoteStore::new(MemoryLocalStorage::new());
    store.save(&sample_collection()).unwrap();

    let smaller = NoteCollection::from_pairs([("Only", "one")]).unwrap();
    store.save(&smaller).unwrap();

    assert_eq!(store.load(), smaller);
    assert_eq!(
        store.storage().get_item("notes").unwrap().as_deref(),
        Some(r#"{"Only":"one"}"#)
    );
}

#[test]
fn load_without_stored_value_returns_default() {
    let conn = open_db_in_memory().unwrap();
    let store = NoteStore::new(SqliteLocalStorage::try_new(&conn).unwrap());

    let (loaded, source) = store.load_with_source();

    assert_eq!(source, LoadSource::Absent);
    assert_eq!(loaded, NoteCollection::default());
}

#[test]
fn load_with_malformed_value_returns_default_silently() {
    let conn = open_db_in_memory().unwrap();
    let mut storage = SqliteLocalStorage::try_new(&conn).unwrap();
    storage.set_item("notes", "{\"To-Do List\": ").unwrap();
    let store = NoteStore::new(storage);

    let (loaded, source) = store.load_with_source();

    assert_eq!(source, LoadSource::Malformed);
    assert!(loaded.is_default());
}

#[test]
fn stores_with_different_keys_do_not_interfere() {
    let conn = open_db_in_memory().unwrap();
    let mut work = NoteStore::with_key(SqliteLocalStorage::try_new(&conn).unwrap(), "work");
    let home = NoteStore::with_key(SqliteLocalStorage::try_new(&conn).unwrap(), "home");

    work.save(&NoteCollection::from_pairs([("Standup", "notes")]).unwrap())
        .unwrap();

    assert_eq!(work.load().get("Standup"), Some("notes"));
    assert!(home.load().is_default());
}
