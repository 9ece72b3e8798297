//! Scanner for the Lox language.
//!
//! Turns a source string into a finite token sequence ending in `Eof`.
//! Unrecognized characters are reported and skipped; they never stop a scan.
//!
//! # Architecture
//!
//! ```text
//! source → lox_lexer_core::scan_step → (RawTag, len) → cook → Token | LexError
//! ```
//!
//! - [`scan`] / [`scan_with_config`] run a full pass and return a [`LexOutput`].
//! - [`scan_with_sink`] additionally reports each error to a
//!   [`DiagnosticSink`] as it is found.
//! - [`Scanner`] is the lazy form of the same pass.
//!
//! Line comments start with `//` and run to the end of the line.

mod cooker;
pub mod lex_error;
mod scanner;
mod token;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

use lox_diagnostic::DiagnosticSink;

/// Scanner configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    /// Line number of the first source line.
    pub first_line: u32,
}

/// Result of a full scan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LexOutput<'src> {
    /// Tokens in source order. Never empty; the last is `Eof`.
    pub tokens: Vec<Token<'src>>,
    /// Errors in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput<'_> {
    /// Whether any lexical error occurred.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of tokens excluding the final `Eof`.
    pub fn len_without_eof(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }
}

/// Scan `source` with the default configuration.
pub fn scan(source: &str) -> LexOutput<'_> {
    scan_with_config(source, &LexerConfig::default())
}

/// Scan `source` with an explicit configuration.
pub fn scan_with_config<'src>(source: &'src str, config: &LexerConfig) -> LexOutput<'src> {
    drive(Scanner::with_config(source, config), |_| {})
}

/// Scan `source`, reporting each error to `sink` as it is found.
///
/// The returned output still carries every error.
pub fn scan_with_sink<'src, S>(
    source: &'src str,
    config: &LexerConfig,
    sink: &mut S,
) -> LexOutput<'src>
where
    S: DiagnosticSink + ?Sized,
{
    drive(Scanner::with_config(source, config), |err| {
        sink.report(err.to_diagnostic());
    })
}

#[tracing::instrument(level = "debug", skip_all)]
fn drive<'src>(scanner: Scanner<'src>, mut on_error: impl FnMut(&LexError)) -> LexOutput<'src> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for item in scanner {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => {
                on_error(&err);
                errors.push(err);
            }
        }
    }
    let output = LexOutput { tokens, errors };
    tracing::debug!(
        tokens = output.len_without_eof(),
        errors = output.errors.len(),
        "scan complete"
    );
    output
}
