//! The url scanner: `url(...)`, quoted or unquoted, with bad-url
//! recovery.
//!
//! Entered by the ident scanner after it has consumed `url(` (name
//! matched case-insensitively). Whitespace around the address is
//! trimmed; the address itself is escape-decoded. When the body goes
//! bad, the scanner resynchronizes past the matching `)` so the rest
//! of the input still tokenizes.

use csslex_core::Cursor;

use crate::escape::consume_escape;
use crate::lookahead::{is_valid_escape, is_whitespace};
use crate::string;
use crate::token::TokenKind;

/// Scan a url body. The cursor sits just past the `(` of `url(`.
pub fn scan(cursor: &mut Cursor<'_>) -> TokenKind {
    cursor.eat_while(is_whitespace);

    match cursor.current() {
        b')' => {
            cursor.advance();
            TokenKind::Url(String::new())
        }
        b'"' | b'\'' => scan_quoted_body(cursor),
        _ if cursor.is_eof() => TokenKind::Url(String::new()),
        _ => scan_unquoted_body(cursor),
    }
}

/// `url("...")`: the address is a string literal; only whitespace may
/// sit between its closing quote and the `)`. EOF before the `)` is a
/// bad url (unlike the unquoted form, which closes at EOF).
fn scan_quoted_body(cursor: &mut Cursor<'_>) -> TokenKind {
    let (value, ok) = string::scan_raw(cursor);
    if !ok {
        consume_bad_url_remnants(cursor);
        return TokenKind::BadUrl(value);
    }
    cursor.eat_while(is_whitespace);
    if cursor.current() == b')' {
        cursor.advance();
        return TokenKind::Url(value);
    }
    consume_bad_url_remnants(cursor);
    TokenKind::BadUrl(value)
}

fn scan_unquoted_body(cursor: &mut Cursor<'_>) -> TokenKind {
    let mut value = String::new();
    loop {
        let mark = cursor.mark();
        cursor.eat_while(is_plain_url_byte);
        value.push_str(cursor.take(mark));

        if cursor.is_eof() {
            return TokenKind::Url(value);
        }
        match cursor.current() {
            b')' => {
                cursor.advance();
                return TokenKind::Url(value);
            }
            b' ' | b'\t' | b'\n' => {
                cursor.eat_while(is_whitespace);
                if cursor.current() == b')' {
                    cursor.advance();
                    return TokenKind::Url(value);
                }
                if cursor.is_eof() {
                    return TokenKind::Url(value);
                }
                // Whitespace inside the address: bad url.
                consume_bad_url_remnants(cursor);
                return TokenKind::BadUrl(value);
            }
            b'\\' if is_valid_escape(cursor) => consume_escape(cursor, &mut value),
            // Quote, `(`, bare `\`, or a non-printable.
            _ => {
                consume_bad_url_remnants(cursor);
                return TokenKind::BadUrl(value);
            }
        }
    }
}

/// A byte that may appear raw in an unquoted url address.
fn is_plain_url_byte(b: u8) -> bool {
    !matches!(b, b'"' | b'\'' | b'(' | b')' | b'\\')
        && !is_whitespace(b)
        && !is_non_printable(b)
}

/// U+0000–U+0008, U+000B, U+000E–U+001F, U+007F.
fn is_non_printable(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F)
}

/// Resynchronize after a bad url body: consume through the closing
/// `)` or to EOF. A valid escape is consumed as a unit so an escaped
/// `)` cannot end the remnants early.
fn consume_bad_url_remnants(cursor: &mut Cursor<'_>) {
    let mut discard = String::new();
    loop {
        if cursor.is_eof() {
            return;
        }
        if cursor.current() == b')' {
            cursor.advance();
            return;
        }
        if is_valid_escape(cursor) {
            consume_escape(cursor, &mut discard);
        } else {
            cursor.advance_char();
        }
    }
}
