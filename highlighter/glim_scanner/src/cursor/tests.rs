use crate::SourceBuffer;
use pretty_assertions::assert_eq;

use super::Cursor;

#[test]
fn current_and_peeks() {
    let buf = SourceBuffer::new("abcd");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
    assert_eq!(cursor.peek3(), b'd');
}

#[test]
fn peeks_past_the_end_read_the_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
    assert_eq!(cursor.peek3(), 0);
}

#[test]
fn peek3_is_in_bounds_at_every_position() {
    // Content length chosen to land exactly on the padding boundary cases.
    for len in [0usize, 1, 59, 60, 61, 63, 64, 65, 127, 128] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        let mut cursor = buf.cursor();
        while !cursor.is_eof() {
            // Must not panic.
            let _ = (cursor.peek(), cursor.peek2(), cursor.peek3());
            cursor.advance();
        }
        assert_eq!(cursor.pos() as usize, len);
    }
}

#[test]
fn eof_detection() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn utf8_char_widths() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xCE), 2); // λ lead byte
    assert_eq!(Cursor::utf8_char_width(0xE2), 3); // → lead byte
    assert_eq!(Cursor::utf8_char_width(0xF0), 4); // 😀 lead byte
    assert_eq!(Cursor::utf8_char_width(0x80), 1); // continuation byte
}

#[test]
fn advance_char_steps_whole_characters() {
    let buf = SourceBuffer::new("aλ→😀");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 1);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 3);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 6);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 10);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_delim_lands_on_the_delimiter() {
    let buf = SourceBuffer::new("abc\ndef");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_delim(b'\n'), 3);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn skip_to_delim_without_a_match_lands_at_eof() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_delim(b'\n'), 3);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_delim_skips_interior_nulls() {
    let buf = SourceBuffer::new("a\0b\nx");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_delim(b'\n'), 3);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn skip_to_delim2_takes_the_earliest() {
    let buf = SourceBuffer::new("abc\\de\"f");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_delim2(b'"', b'\\'), 3);
    assert_eq!(cursor.current(), b'\\');
}

#[test]
fn skip_to_delim3_takes_the_earliest() {
    let buf = SourceBuffer::new("ab\nc/d");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_delim3(b'/', b'\\', b'\n'), 2);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn skip_with_zero_distance() {
    let buf = SourceBuffer::new("/x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_delim(b'/'), 0);
    assert_eq!(cursor.current(), b'/');
}

#[test]
fn byte_at_reads_absolute_positions() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.byte_at(0), b'a');
    assert_eq!(cursor.byte_at(2), b'c');
    assert_eq!(cursor.byte_at(3), 0); // sentinel
}
