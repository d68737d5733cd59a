//! Per-task edit lifecycle.
//!
//! Each task is either being viewed or being edited, and the transition back
//! to viewing happens only on an explicit commit or cancel intent. The
//! machine is pure state: no rendering technology is involved, so the same
//! lifecycle drives a CLI argument, a form field, or a test.

/// Edit lifecycle of a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing { draft: String },
}

/// What an edit session produced when it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The trimmed draft to apply as the task's new text.
    Committed(String),
    /// The edit was abandoned; the task keeps its current text.
    Cancelled,
}

impl EditState {
    /// Start editing, seeding the draft with the task's current text.
    pub fn begin(current_text: &str) -> Self {
        EditState::Editing {
            draft: current_text.to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    /// Replace the draft. Ignored while viewing.
    pub fn update_draft(&mut self, input: &str) {
        if let EditState::Editing { draft } = self {
            *draft = input.to_string();
        }
    }

    /// Commit the draft and return to viewing.
    ///
    /// A draft that trims to empty commits nothing: an empty submission is
    /// indistinguishable from a cancel and is treated as one.
    pub fn submit(&mut self) -> EditOutcome {
        match std::mem::replace(self, EditState::Viewing) {
            EditState::Editing { draft } => {
                let text = draft.trim();
                if text.is_empty() {
                    EditOutcome::Cancelled
                } else {
                    EditOutcome::Committed(text.to_string())
                }
            }
            EditState::Viewing => EditOutcome::Cancelled,
        }
    }

    /// Abandon the draft and return to viewing.
    pub fn cancel(&mut self) -> EditOutcome {
        *self = EditState::Viewing;
        EditOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_commits_trimmed_draft() {
        let mut state = EditState::begin("old text");
        state.update_draft("  new text  ");
        assert_eq!(state.submit(), EditOutcome::Committed("new text".into()));
        assert!(!state.is_editing());
    }

    #[test]
    fn empty_submission_is_a_cancel() {
        let mut state = EditState::begin("old text");
        state.update_draft("   ");
        assert_eq!(state.submit(), EditOutcome::Cancelled);
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn cancel_discards_draft() {
        let mut state = EditState::begin("old text");
        state.update_draft("half-typed");
        assert_eq!(state.cancel(), EditOutcome::Cancelled);
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn update_draft_while_viewing_is_ignored() {
        let mut state = EditState::Viewing;
        state.update_draft("stray input");
        assert_eq!(state, EditState::Viewing);
        assert_eq!(state.submit(), EditOutcome::Cancelled);
    }
}
