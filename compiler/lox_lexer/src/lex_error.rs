//! Lexer error types.
//!
//! Errors carry WHERE (`span`, `line`) and WHAT (`kind`). They never stop a
//! scan: the offending character produces no token and scanning resumes
//! right after it.

use lox_diagnostic::{Diagnostic, ErrorCode};

use crate::Span;

/// A lexical error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// Line the offending text starts on.
    pub line: u32,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unrecognized character {ch:?}")]
    UnrecognizedCharacter { ch: char },
}

impl LexError {
    /// An unrecognized character at `span` on `line`.
    pub fn unrecognized(ch: char, span: Span, line: u32) -> Self {
        LexError {
            span,
            line,
            kind: LexErrorKind::UnrecognizedCharacter { ch },
        }
    }

    /// Error code for this error's kind.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnrecognizedCharacter { .. } => ErrorCode::E0001,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.line, self.to_string()).with_code(self.code());
        match self.kind {
            LexErrorKind::UnrecognizedCharacter { ch: '\0' } => {
                diag.with_note("null bytes are not allowed in source text")
            }
            LexErrorKind::UnrecognizedCharacter { .. } => diag,
        }
    }
}
