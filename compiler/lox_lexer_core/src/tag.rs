//! Raw token tags produced by the scanner.

/// Classification of a raw token.
///
/// Discriminants are grouped by category so range checks stay cheap:
/// punctuation `0..16`, one-or-two character operators `16..32`, trivia
/// `112..`, errors `240..`, and `Eof` at `255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Single-character punctuation ===
    /// `(`
    LeftParen = 0,
    /// `)`
    RightParen = 1,
    /// `{`
    LeftBrace = 2,
    /// `}`
    RightBrace = 3,
    /// `,`
    Comma = 4,
    /// `.`
    Dot = 5,
    /// `-`
    Minus = 6,
    /// `+`
    Plus = 7,
    /// `;`
    Semicolon = 8,
    /// `*`
    Star = 9,
    /// `/` (not followed by a second `/`)
    Slash = 10,

    // === One-or-two character operators ===
    /// `!`
    Bang = 16,
    /// `!=`
    BangEqual = 17,
    /// `=`
    Equal = 18,
    /// `==`
    EqualEqual = 19,
    /// `<`
    Less = 20,
    /// `<=`
    LessEqual = 21,
    /// `>`
    Greater = 22,
    /// `>=`
    GreaterEqual = 23,

    // === Trivia ===
    /// Run of spaces, tabs and carriage returns.
    Whitespace = 112,
    /// A single `\n`.
    Newline = 113,
    /// `//` up to (not including) the next `\n` or EOF.
    LineComment = 114,

    // === Errors ===
    /// One character (possibly multi-byte) that starts no lexeme.
    InvalidChar = 240,
    /// Null byte inside the source content.
    InteriorNull = 241,

    // === Control ===
    /// End of input. Always `len == 0`.
    Eof = 255,
}

/// A raw token: a tag plus its length in bytes.
///
/// The start offset is implicit: it is the sum of the lengths of all
/// previous raw tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
