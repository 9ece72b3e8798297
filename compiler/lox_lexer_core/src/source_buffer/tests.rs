use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.source_len, 0);
    // Sentinel present at index 0
    assert_eq!(buf.buf[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("(+)");
    assert_eq!(buf.source_len, 3);
    assert_eq!(&buf.buf[..3], b"(+)");
    assert_eq!(buf.buf[3], 0);
}

#[test]
fn utf8_multibyte_source() {
    let source = "+ \u{1F600} -"; // emoji (4 bytes)
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.source_len as usize, source.len());
    assert_eq!(&buf.buf[..source.len()], source.as_bytes());
}

// === Cache-Line Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source: String = "+".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.buf.len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {}",
            buf.buf.len(),
            len
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.buf[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

#[test]
fn padding_covers_lookahead() {
    // Source fills the line exactly up to the sentinel; `peek` must stay in bounds.
    let source = "=".repeat(CACHE_LINE - 1);
    let buf = SourceBuffer::new(&source);
    assert!(buf.buf.len() >= source.len() + 2);
}

#[test]
fn interior_null_is_preserved() {
    let buf = SourceBuffer::new("+\0-");
    assert_eq!(buf.source_len, 3);
    assert_eq!(&buf.buf[..3], b"+\0-");
}

// === Cursor ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("{}");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'{');
}

#[test]
fn cursor_on_empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

#[test]
fn cursor_at_resumes_mid_source() {
    let buf = SourceBuffer::new("+-*");
    let cursor = buf.cursor_at(2);
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'*');
}

#[test]
fn cursor_at_clamps_past_end() {
    let buf = SourceBuffer::new("+-");
    let cursor = buf.cursor_at(10);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}
