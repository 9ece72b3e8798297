//! Low-level raw scanner for Lox.
//!
//! Produces `(RawTag, len)` pairs over a sentinel-terminated buffer. Every
//! byte of the source is covered by exactly one raw token: trivia
//! (whitespace, newlines, line comments) and unrecognized characters are
//! tokens here, so the lengths of a full scan always sum to the source
//! length. Line tracking, token filtering and error reporting live in
//! `lox_lexer`.
//!
//! ```text
//! source → SourceBuffer → Cursor → scan_step → (Cursor, RawToken)
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{scan_step, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
