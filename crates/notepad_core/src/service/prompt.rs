//! User decision seam.
//!
//! # Responsibility
//! - Describe the questions core asks a user (`PromptRequest`) and the
//!   answers it accepts (`PromptDecision`).
//! - Describe the notices core shows after a decision (`Notice`).
//!
//! # Invariants
//! - A host that cannot obtain an answer returns `PromptDecision::Cancelled`.
//! - Only the exact literal [`DELETE_CONFIRMATION_KEYWORD`] confirms deletion.

use std::collections::VecDeque;

/// Literal a user must type to confirm deleting a note.
pub const DELETE_CONFIRMATION_KEYWORD: &str = "DELETE";

/// A question asked of the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    /// Name for a new note.
    NoteName,
    /// Confirmation text for deleting `title`.
    DeleteConfirmation { title: String },
}

impl PromptRequest {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoteName => "Note Name",
            Self::DeleteConfirmation { .. } => "Type 'DELETE' to confirm:",
        }
    }
}

/// A user's answer to a [`PromptRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptDecision {
    Value(String),
    Cancelled,
}

impl PromptDecision {
    pub fn value(text: impl Into<String>) -> Self {
        Self::Value(text.into())
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(text) => Some(text.as_str()),
            Self::Cancelled => None,
        }
    }

    /// Whether this answer confirms a delete request.
    pub fn confirms_delete(&self) -> bool {
        self.as_value() == Some(DELETE_CONFIRMATION_KEYWORD)
    }
}

/// User-visible outcome messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoteDeleted,
    NoteNotDeleted,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoteDeleted => "Note deleted.",
            Self::NoteNotDeleted => "Note not deleted.",
        }
    }
}

/// Host-provided source of user decisions.
pub trait Prompter {
    /// Asks `request` and blocks until the user answers or dismisses it.
    fn ask(&mut self, request: &PromptRequest) -> PromptDecision;
    /// Shows `notice` to the user.
    fn notify(&mut self, notice: Notice);
}

/// Answers prompts from a queue of prepared decisions.
///
/// Once the queue is drained every request is answered with `Cancelled`.
/// Asked requests and shown notices are recorded in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    decisions: VecDeque<PromptDecision>,
    asked: Vec<PromptRequest>,
    notices: Vec<Notice>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decisions(decisions: impl IntoIterator<Item = PromptDecision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, decision: PromptDecision) {
        self.decisions.push_back(decision);
    }

    pub fn asked(&self) -> &[PromptRequest] {
        &self.asked
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, request: &PromptRequest) -> PromptDecision {
        self.asked.push(request.clone());
        self.decisions
            .pop_front()
            .unwrap_or(PromptDecision::Cancelled)
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::{PromptDecision, PromptRequest, Prompter, ScriptedPrompter};

    #[test]
    fn only_exact_keyword_confirms_delete() {
        assert!(PromptDecision::value("DELETE").confirms_delete());
        assert!(!PromptDecision::value("delete").confirms_delete());
        assert!(!PromptDecision::value(" DELETE").confirms_delete());
        assert!(!PromptDecision::Cancelled.confirms_delete());
    }

    #[test]
    fn scripted_prompter_cancels_after_queue_drains() {
        let mut prompter = ScriptedPrompter::with_decisions([PromptDecision::value("one")]);
        assert_eq!(
            prompter.ask(&PromptRequest::NoteName),
            PromptDecision::value("one")
        );
        assert_eq!(prompter.ask(&PromptRequest::NoteName), PromptDecision::Cancelled);
        assert_eq!(prompter.asked().len(), 2);
    }
}
