//! UI-facing application state and event handlers.
//!
//! # Responsibility
//! - Own the session state a host renders (list, selection, editor text).
//! - Translate host events into service calls followed by a save.
//!
//! # See also
//! - `service::prompt` for the decision seam hosts implement.

pub mod controller;
