//! Escape decoding and name accumulation.
//!
//! Escapes are decoded at scan time: token payloads carry the resolved
//! text, never the raw `\XX` spelling. The two escape forms are
//! `\` + 1–6 hex digits (+ one optional whitespace terminator) and
//! `\` + any non-newline character standing for itself.

use csslex_core::Cursor;

use crate::lookahead::{is_name_char, is_valid_escape, is_whitespace};

/// Decoded stand-in for escapes that name no valid code point.
const REPLACEMENT: char = '\u{FFFD}';

/// Decode one escape sequence into `out`.
///
/// The cursor must sit on the `\` of a valid escape (checked by the
/// caller via [`is_valid_escape`]); on return it sits just past the
/// sequence, including the single optional whitespace character that
/// may terminate a hex escape.
///
/// Hex escapes naming code point 0, a surrogate, or anything above
/// U+10FFFF decode to U+FFFD.
pub fn consume_escape(cursor: &mut Cursor<'_>, out: &mut String) {
    debug_assert_eq!(cursor.current(), b'\\');
    cursor.advance();

    if cursor.current().is_ascii_hexdigit() {
        let mut value: u32 = 0;
        let mut digits = 0;
        while digits < 6 && cursor.current().is_ascii_hexdigit() {
            let digit = char::from(cursor.current())
                .to_digit(16)
                .unwrap_or_default();
            value = value * 16 + digit;
            digits += 1;
            cursor.advance();
        }
        // One whitespace character may terminate the digit run so a
        // following hex digit can be literal text: `\61 bc` is "abc".
        if is_whitespace(cursor.current()) {
            cursor.advance();
        }
        out.push(decode_code_point(value));
    } else {
        // Literal form: the escaped character stands for itself,
        // multi-byte characters included.
        let mark = cursor.mark();
        cursor.advance_char();
        out.push_str(cursor.take(mark));
    }
}

fn decode_code_point(value: u32) -> char {
    if value == 0 || (0xD800..=0xDFFF).contains(&value) {
        return REPLACEMENT;
    }
    char::from_u32(value).unwrap_or(REPLACEMENT)
}

/// Consume a name (identifier body) and return its decoded text.
///
/// Runs of plain name bytes are sliced straight out of the source;
/// the string only grows an escape at a time. Non-ASCII characters
/// are name characters wholesale, so slices always land on UTF-8
/// boundaries.
pub fn consume_name(cursor: &mut Cursor<'_>) -> String {
    let mut name = String::new();
    loop {
        let mark = cursor.mark();
        cursor.eat_while(is_name_char);
        name.push_str(cursor.take(mark));
        if is_valid_escape(cursor) {
            consume_escape(cursor, &mut name);
        } else {
            return name;
        }
    }
}
