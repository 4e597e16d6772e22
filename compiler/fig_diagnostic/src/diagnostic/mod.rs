//! The [`Diagnostic`] type and its plain-text rendering.

use fig_ir::SourcePosition;
use std::fmt;

use crate::ErrorCode;

/// A source position with an explanatory message. The message may be empty.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub position: SourcePosition,
    pub message: String,
}

/// An error ready to be shown to a user.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, position: SourcePosition, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            position,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Position of the first label, if any.
    pub fn primary_position(&self) -> Option<SourcePosition> {
        self.labels.first().map(|label| label.position)
    }

    /// Plain-text rendering:
    ///
    /// ```text
    /// error[E6017]: Division by zero
    ///   --> 1:3
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        for label in &self.labels {
            write!(f, "\n  --> {}", label.position)?;
            if !label.message.is_empty() {
                write!(f, "\n   | {}", label.message)?;
            }
        }
        for note in &self.notes {
            write!(f, "\n   = note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
