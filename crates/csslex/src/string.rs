//! The string scanner: `"..."` and `'...'`.

use csslex_core::Cursor;

use crate::escape::consume_escape;
use crate::lookahead::is_valid_escape;
use crate::token::TokenKind;

/// Scan a quoted string. The cursor must sit on the opening quote.
///
/// Emits [`TokenKind::QuotedString`] with the decoded content (quotes
/// stripped), or [`TokenKind::BadString`] when an unescaped newline
/// breaks the literal. The newline stays unconsumed so it lexes as
/// ordinary whitespace afterwards. A string still open at EOF closes
/// there and is not an error.
pub fn scan(cursor: &mut Cursor<'_>) -> TokenKind {
    let (value, ok) = scan_raw(cursor);
    if ok {
        TokenKind::QuotedString(value)
    } else {
        TokenKind::BadString(value)
    }
}

/// The scanning core, shared with the url scanner (which turns a bad
/// quoted body into `BadUrl` rather than `BadString`).
///
/// Returns the decoded content and whether the literal was well formed.
pub(crate) fn scan_raw(cursor: &mut Cursor<'_>) -> (String, bool) {
    let quote = cursor.current();
    debug_assert!(matches!(quote, b'"' | b'\''));
    cursor.advance();

    let mut value = String::new();
    loop {
        let mark = cursor.mark();
        let stop = cursor.skip_to_string_delim(quote);
        value.push_str(cursor.take(mark));

        match stop {
            q if q == quote => {
                cursor.advance();
                return (value, true);
            }
            b'\n' => return (value, false),
            b'\\' => {
                if cursor.peek() == b'\n' {
                    // Line continuation: both characters vanish.
                    cursor.advance_n(2);
                } else if is_valid_escape(cursor) {
                    consume_escape(cursor, &mut value);
                } else {
                    // `\` as the last byte of the source.
                    cursor.advance();
                }
            }
            // EOF closes the string.
            _ => return (value, true),
        }
    }
}
