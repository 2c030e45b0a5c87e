//! Inline Title Editor
//!
//! State machine behind a todo row's double-click-to-edit field.
//!
//! ```text
//! Viewing --begin--> Editing --submit--> Saving --finish(Ok)--> Viewing
//!                      |  ^                 |
//!                cancel|  +---finish(Err)---+
//!                      v
//!                   Viewing
//! ```

use crate::client::RenameOutcome;
use crate::error::TodoResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { draft: String },
    /// A submitted draft is waiting for the server
    Saving { draft: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoEditor {
    state: EditState,
}

impl TodoEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// True while the edit field is shown (including while saving)
    pub fn is_editing(&self) -> bool {
        !matches!(self.state, EditState::Viewing)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.state, EditState::Saving { .. })
    }

    pub fn draft(&self) -> &str {
        match &self.state {
            EditState::Viewing => "",
            EditState::Editing { draft } | EditState::Saving { draft } => draft,
        }
    }

    /// Open the field pre-filled with the current title
    pub fn begin(&mut self, title: &str) {
        if matches!(self.state, EditState::Viewing) {
            self.state = EditState::Editing { draft: title.to_string() };
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditState::Editing { draft } = &mut self.state {
            *draft = text.into();
        }
    }

    /// Discard the draft (Escape). Nothing is sent.
    pub fn cancel(&mut self) {
        if let EditState::Editing { .. } = self.state {
            self.state = EditState::Viewing;
        }
    }

    /// Take the draft for sending. Returns `None` unless editing, so a blur
    /// that follows an Enter submit does not send twice.
    pub fn submit(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            EditState::Editing { draft } => {
                self.state = EditState::Saving { draft: draft.clone() };
                Some(draft)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Settle a submitted draft. Success closes the field; failure reopens it
    /// with the draft kept for another attempt.
    pub fn finish(&mut self, result: &TodoResult<RenameOutcome>) {
        let EditState::Saving { draft } = std::mem::take(&mut self.state) else {
            return;
        };
        if result.is_err() {
            self.state = EditState::Editing { draft };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Operation, TodoError};

    #[test]
    fn test_escape_discards_draft() {
        let mut editor = TodoEditor::new();
        editor.begin("Buy milk");
        editor.set_draft("Buy bread");
        editor.cancel();
        assert_eq!(editor.state(), &EditState::Viewing);
        assert_eq!(editor.submit(), None);
    }

    #[test]
    fn test_submit_once() {
        let mut editor = TodoEditor::new();
        editor.begin("Buy milk");
        editor.set_draft("Buy bread");

        assert_eq!(editor.submit().as_deref(), Some("Buy bread"));
        assert!(editor.is_saving());
        assert_eq!(editor.submit(), None);

        editor.finish(&Ok(RenameOutcome::Renamed(crate::Todo {
            id: 1,
            title: "Buy bread".into(),
            completed: false,
            owner_id: 1,
        })));
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_failure_returns_to_editing() {
        let mut editor = TodoEditor::new();
        editor.begin("Buy milk");
        editor.set_draft("");
        editor.submit();

        let err = TodoError::remote(Operation::Delete, ApiError::Network("offline".into()));
        editor.finish(&Err(err));
        assert_eq!(editor.state(), &EditState::Editing { draft: String::new() });
    }

    #[test]
    fn test_edits_ignored_while_saving() {
        let mut editor = TodoEditor::new();
        editor.begin("a");
        editor.submit();
        editor.set_draft("b");
        editor.cancel();
        assert_eq!(editor.draft(), "a");
        assert!(editor.is_saving());
    }
}
