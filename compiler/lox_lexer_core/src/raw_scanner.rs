//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The core is [`scan_step`], a pure function from a cursor to the next
//! cursor and the raw token between them. [`RawScanner`] is a thin stateful
//! wrapper for callers that want to pull tokens one at a time.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm advances the cursor
//! past exactly one lexeme (or one trivia run) and names its tag; the length
//! is the distance the cursor moved. The sentinel byte (`0x00`) dispatches
//! to EOF detection.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Classify the lexeme starting at `cursor`.
///
/// Returns the cursor positioned just past the lexeme, together with the
/// raw token covering it. At EOF the cursor is returned unchanged with
/// `RawTag::Eof` and `len == 0`, so repeated calls keep returning EOF.
#[inline]
pub fn scan_step(mut cursor: Cursor<'_>) -> (Cursor<'_>, RawToken) {
    let start = cursor.pos();
    let tag = classify(&mut cursor);
    let len = cursor.pos() - start;
    (cursor, RawToken { tag, len })
}

fn classify(cursor: &mut Cursor<'_>) -> RawTag {
    match cursor.current() {
        0 => null_or_eof(cursor),
        b' ' | b'\t' | b'\r' => {
            cursor.eat_whitespace();
            RawTag::Whitespace
        }
        b'\n' => single(cursor, RawTag::Newline),
        b'(' => single(cursor, RawTag::LeftParen),
        b')' => single(cursor, RawTag::RightParen),
        b'{' => single(cursor, RawTag::LeftBrace),
        b'}' => single(cursor, RawTag::RightBrace),
        b',' => single(cursor, RawTag::Comma),
        b'.' => single(cursor, RawTag::Dot),
        b'-' => single(cursor, RawTag::Minus),
        b'+' => single(cursor, RawTag::Plus),
        b';' => single(cursor, RawTag::Semicolon),
        b'*' => single(cursor, RawTag::Star),
        b'!' => with_equal(cursor, RawTag::Bang, RawTag::BangEqual),
        b'=' => with_equal(cursor, RawTag::Equal, RawTag::EqualEqual),
        b'<' => with_equal(cursor, RawTag::Less, RawTag::LessEqual),
        b'>' => with_equal(cursor, RawTag::Greater, RawTag::GreaterEqual),
        b'/' => slash_or_comment(cursor),
        _ => invalid_char(cursor),
    }
}

// ─── EOF ────────────────────────────────────────────────────────────

fn null_or_eof(cursor: &mut Cursor<'_>) -> RawTag {
    if cursor.is_eof() {
        RawTag::Eof
    } else {
        cursor.advance();
        RawTag::InteriorNull
    }
}

// ─── Operators ──────────────────────────────────────────────────────

#[inline]
fn single(cursor: &mut Cursor<'_>, tag: RawTag) -> RawTag {
    cursor.advance();
    tag
}

/// `!`, `=`, `<`, `>`: maximal munch on a following `=`.
#[inline]
fn with_equal(cursor: &mut Cursor<'_>, one: RawTag, two: RawTag) -> RawTag {
    cursor.advance();
    if cursor.eat(b'=') {
        two
    } else {
        one
    }
}

// ─── Comments ───────────────────────────────────────────────────────

fn slash_or_comment(cursor: &mut Cursor<'_>) -> RawTag {
    if cursor.peek() == b'/' {
        cursor.advance_n(2);
        cursor.eat_until_newline_or_eof();
        RawTag::LineComment
    } else {
        cursor.advance();
        RawTag::Slash
    }
}

// ─── Errors ─────────────────────────────────────────────────────────

/// Consume one whole character so later slices stay on char boundaries.
fn invalid_char(cursor: &mut Cursor<'_>) -> RawTag {
    cursor.advance_char();
    RawTag::InvalidChar
}

/// Pull-style wrapper around [`scan_step`].
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let (next, token) = scan_step(self.cursor);
        self.cursor = next;
        token
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }
}
