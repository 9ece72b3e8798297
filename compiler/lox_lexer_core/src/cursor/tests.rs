use crate::SourceBuffer;

use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("(){}");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'(');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("(){}");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b')');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("+-*/;.");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'/');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("!=");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'!');
    cursor.advance();
    assert_eq!(cursor.current(), b'=');
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn copy_is_an_independent_snapshot() {
    let buf = SourceBuffer::new("<=");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    cursor.advance();
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 1);
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let buf = SourceBuffer::new("<=>");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'=');
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("/");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), 0);
}

// === Eat (match) ===

#[test]
fn eat_consumes_on_match() {
    let buf = SourceBuffer::new("==");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.eat(b'='));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_leaves_cursor_on_mismatch() {
    let buf = SourceBuffer::new("=+");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(!cursor.eat(b'='));
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.current(), b'+');
}

#[test]
fn eat_never_consumes_at_eof() {
    let buf = SourceBuffer::new("!");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(!cursor.eat(b'='));
    assert!(!cursor.eat(0));
    assert_eq!(cursor.pos(), 1);
}

// === EOF & Interior Nulls ===

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("+\0-");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Scanning helpers ===

#[test]
fn eat_while_stops_at_predicate_failure() {
    let buf = SourceBuffer::new("*** /");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'*');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("***");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'*');
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_covers_space_tab_and_cr() {
    let buf = SourceBuffer::new(" \t\r \n+");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let buf = SourceBuffer::new("// note\n+");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_reaches_eof() {
    let buf = SourceBuffer::new("// trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 11);
}

// === UTF-8 ===

#[test]
fn utf8_char_width_by_leading_byte() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn advance_char_skips_whole_character() {
    let source = "é+";
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'+');

    let buf = SourceBuffer::new("\u{1F600}");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert!(cursor.is_eof());
}
