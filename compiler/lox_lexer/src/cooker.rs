//! Token cooking layer.
//!
//! Maps raw tags from `lox_lexer_core` onto what the scanner does with
//! them:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → cook → Cooked
//! ```
//!
//! - **Operators/punctuation**: direct 1:1 mapping to `TokenKind`
//! - **Trivia**: skipped; newlines bump the line counter
//! - **Errors**: become `LexError::UnrecognizedCharacter`

use lox_lexer_core::RawTag;

use crate::TokenKind;

/// What the scanner should do with one raw token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cooked {
    /// Emit a token of this kind.
    Token(TokenKind),
    /// Skip; no token and no line change.
    Skip,
    /// Skip and start a new line.
    Newline,
    /// Report the character and skip it.
    Unrecognized,
    /// Emit the end-of-input token and stop.
    Eof,
}

/// Cook a single raw tag.
#[inline]
pub(crate) fn cook(tag: RawTag) -> Cooked {
    match tag {
        // Direct-map punctuation
        RawTag::LeftParen => Cooked::Token(TokenKind::LeftParen),
        RawTag::RightParen => Cooked::Token(TokenKind::RightParen),
        RawTag::LeftBrace => Cooked::Token(TokenKind::LeftBrace),
        RawTag::RightBrace => Cooked::Token(TokenKind::RightBrace),
        RawTag::Comma => Cooked::Token(TokenKind::Comma),
        RawTag::Dot => Cooked::Token(TokenKind::Dot),
        RawTag::Minus => Cooked::Token(TokenKind::Minus),
        RawTag::Plus => Cooked::Token(TokenKind::Plus),
        RawTag::Semicolon => Cooked::Token(TokenKind::Semicolon),
        RawTag::Star => Cooked::Token(TokenKind::Star),
        RawTag::Slash => Cooked::Token(TokenKind::Slash),

        // One-or-two character operators
        RawTag::Bang => Cooked::Token(TokenKind::Bang),
        RawTag::BangEqual => Cooked::Token(TokenKind::BangEqual),
        RawTag::Equal => Cooked::Token(TokenKind::Equal),
        RawTag::EqualEqual => Cooked::Token(TokenKind::EqualEqual),
        RawTag::Less => Cooked::Token(TokenKind::Less),
        RawTag::LessEqual => Cooked::Token(TokenKind::LessEqual),
        RawTag::Greater => Cooked::Token(TokenKind::Greater),
        RawTag::GreaterEqual => Cooked::Token(TokenKind::GreaterEqual),

        // Trivia
        RawTag::Whitespace | RawTag::LineComment => Cooked::Skip,
        RawTag::Newline => Cooked::Newline,

        // Errors
        RawTag::InvalidChar | RawTag::InteriorNull => Cooked::Unrecognized,

        RawTag::Eof => Cooked::Eof,
    }
}
