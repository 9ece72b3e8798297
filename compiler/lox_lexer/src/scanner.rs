//! Lazy token stream over one source string.

use std::iter::FusedIterator;

use lox_lexer_core::{scan_step, SourceBuffer};

use crate::cooker::{cook, Cooked};
use crate::{LexError, LexerConfig, Span, Token};

/// Scanner yielding tokens (and errors) one at a time.
///
/// Between steps the scanner keeps only the byte offset of the next lexeme
/// and the current line; each step rebuilds a cursor at that offset and
/// hands it to [`scan_step`]. The last item is always `Ok(Token { kind:
/// Eof, .. })`, after which the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    source: &'src str,
    buffer: SourceBuffer,
    /// Offset of the next unread byte.
    pos: u32,
    /// Line of the next unread byte.
    line: u32,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Scanner with the default configuration.
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    /// Scanner whose first line is numbered `config.first_line`.
    pub fn with_config(source: &'src str, config: &LexerConfig) -> Self {
        Scanner {
            source,
            buffer: SourceBuffer::new(source),
            pos: 0,
            line: config.first_line,
            finished: false,
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let start = self.pos;
            let (next, raw) = scan_step(self.buffer.cursor_at(start));
            self.pos = next.pos();
            let span = Span::new(start, self.pos);

            match cook(raw.tag) {
                Cooked::Token(kind) => {
                    let lexeme = &self.source[span.range()];
                    debug_assert_eq!(
                        lexeme,
                        kind.fixed_lexeme(),
                        "raw length disagrees with {kind}"
                    );
                    return Some(Ok(Token::new(kind, lexeme, span, self.line)));
                }
                Cooked::Skip => {}
                Cooked::Newline => self.line += 1,
                Cooked::Unrecognized => {
                    let ch = self.source[span.range()]
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    tracing::trace!(line = self.line, ?ch, "unrecognized character");
                    return Some(Err(LexError::unrecognized(ch, span, self.line)));
                }
                Cooked::Eof => {
                    self.finished = true;
                    return Some(Ok(Token::eof(self.pos, self.line)));
                }
            }
        }
        None
    }
}

impl FusedIterator for Scanner<'_> {}
