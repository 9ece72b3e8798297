use std::fmt;

use crate::ErrorCode;

/// A single reported error, located by line.
///
/// Lines use the numbering of the phase that reported them; the scanner
/// counts from its configured first line (0 by default).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: Option<ErrorCode>,
    pub line: u32,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            code: None,
            line,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Attach an error code.
    #[must_use]
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note (additional context).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Plain one-line form: `[line 3] error[E0001]: message`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] error", self.line)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}
