//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value storage contract notes persist through.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Writes replace the whole value stored under a key.
//! - Reads of a missing key return `Ok(None)`, never an error.

pub mod storage_repo;
