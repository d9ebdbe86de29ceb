//! The unicode-range scanner: `u+26`, `u+00??`, `u+400-4ff`.
//!
//! The range resolves to inclusive code point bounds at scan time.
//! A run containing `?` wildcards is padded with `?` to six characters
//! and then substituted twice, `?`→`0` for the start bound and `?`→`f`
//! for the end bound; a wildcard run never takes an explicit end.

use csslex_core::{Cursor, Mark, Span};

use crate::lex_error::{Defect, Error, LexError};
use crate::token::TokenKind;

const MAX_RUN: usize = 6;

/// Scan a unicode-range token. The cursor must sit on `u`/`U` with
/// `+` and a hex digit or `?` behind it (the dispatcher's guard; `u`
/// without them lexes as an identifier).
pub fn scan(cursor: &mut Cursor<'_>, start: Mark) -> Result<TokenKind, Error> {
    let opener_ok = matches!(cursor.current(), b'u' | b'U')
        && cursor.peek() == b'+'
        && (cursor.peek2().is_ascii_hexdigit() || cursor.peek2() == b'?');
    if !opener_ok {
        return Err(Defect::new(
            cursor.pos(),
            cursor.line_col(),
            "unicode-range scanner entered without `u+` and a hex digit or `?`",
        )
        .into());
    }
    cursor.advance_n(2);

    // Hex digits first, then wildcards; a digit after a `?` is not
    // part of this token.
    let mark = cursor.mark();
    let mut len = 0;
    while len < MAX_RUN && cursor.current().is_ascii_hexdigit() {
        cursor.advance();
        len += 1;
    }
    let mut wildcards = false;
    while len < MAX_RUN && cursor.current() == b'?' {
        cursor.advance();
        len += 1;
        wildcards = true;
    }
    let run = cursor.take(mark);

    if wildcards {
        let (range_start, range_end) = resolve_wildcards(run);
        return Ok(TokenKind::UnicodeRange {
            start: range_start,
            end: range_end,
        });
    }

    let range_start = hex_value(run);
    let range_end = if cursor.current() == b'-' && cursor.peek().is_ascii_hexdigit() {
        cursor.advance();
        let mark = cursor.mark();
        let mut len = 0;
        while len < MAX_RUN && cursor.current().is_ascii_hexdigit() {
            cursor.advance();
            len += 1;
        }
        hex_value(cursor.take(mark))
    } else {
        range_start
    };

    if range_end < range_start {
        let span = Span::new(start.pos, cursor.pos());
        return Err(LexError::inverted_unicode_range(span, start.at).into());
    }
    Ok(TokenKind::UnicodeRange {
        start: range_start,
        end: range_end,
    })
}

/// Pad `run` with `?` to six characters, then read it twice with the
/// wildcards as `0` and as `f`.
fn resolve_wildcards(run: &str) -> (u32, u32) {
    let pad = MAX_RUN - run.len();
    let mut lo = 0u32;
    let mut hi = 0u32;
    for b in run
        .bytes()
        .chain(std::iter::repeat(b'?').take(pad))
    {
        let (l, h) = if b == b'?' {
            (0, 0xF)
        } else {
            let digit = hex_digit(b);
            (digit, digit)
        };
        lo = lo * 16 + l;
        hi = hi * 16 + h;
    }
    (lo, hi)
}

fn hex_value(run: &str) -> u32 {
    // At most six hex digits, so this cannot overflow u32.
    run.bytes().fold(0, |acc, b| acc * 16 + hex_digit(b))
}

fn hex_digit(b: u8) -> u32 {
    debug_assert!(b.is_ascii_hexdigit());
    char::from(b).to_digit(16).unwrap_or_default()
}
