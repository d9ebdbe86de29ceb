//! The numeric scanner: numbers, percentages, and dimensions.
//!
//! One pass handles all three: the numeric part first, then `%` or a
//! unit identifier decides the token kind. The exponent is taken
//! speculatively: `e`/`E` only counts when a digit (with optional
//! sign) actually follows, so `12em` is a dimension, not an exponent.

use csslex_core::{Cursor, Mark, Span};

use crate::escape::consume_name;
use crate::lex_error::{Defect, Error, LexError};
use crate::lookahead::{starts_identifier, starts_number};
use crate::token::{NumericKind, TokenKind};

/// Scan a numeric token. The cursor must sit on a number start
/// (digit, or sign/dot with digits behind it); `start` is the mark the
/// dispatcher took at the token's first byte, used for error spans.
///
/// The few constructs the grammar rejects outright all live here: a
/// trailing decimal point (`12.`), a second decimal point (`1.2.3`),
/// and a second exponent (`1e2e3`).
pub fn scan(cursor: &mut Cursor<'_>, start: Mark) -> Result<TokenKind, Error> {
    if !starts_number(cursor) {
        return Err(Defect::new(
            cursor.pos(),
            cursor.line_col(),
            "numeric scanner entered without a number start",
        )
        .into());
    }

    let mut kind = NumericKind::Integer;
    if matches!(cursor.current(), b'+' | b'-') {
        cursor.advance();
    }
    cursor.eat_while(|b| b.is_ascii_digit());

    if cursor.current() == b'.' && cursor.peek().is_ascii_digit() {
        kind = NumericKind::Number;
        cursor.advance();
        cursor.eat_while(|b| b.is_ascii_digit());
    }

    if matches!(cursor.current(), b'e' | b'E') && exponent_follows(cursor) {
        kind = NumericKind::Number;
        cursor.advance();
        if matches!(cursor.current(), b'+' | b'-') {
            cursor.advance();
        }
        cursor.eat_while(|b| b.is_ascii_digit());
    }

    // The lexeme is complete; anything that tries to extend it further
    // is a hard grammar violation, not a recoverable delimiter.
    if cursor.current() == b'.' {
        let span = Span::new(start.pos, cursor.pos());
        let err = if cursor.peek().is_ascii_digit() {
            LexError::second_decimal_point(span, start.at)
        } else {
            LexError::trailing_decimal_point(span, start.at)
        };
        return Err(err.into());
    }
    if matches!(cursor.current(), b'e' | b'E') && exponent_follows(cursor) {
        let span = Span::new(start.pos, cursor.pos());
        return Err(LexError::second_exponent(span, start.at).into());
    }

    let lexeme = cursor.take(start);
    let value: f64 = lexeme.parse().map_err(|_| {
        Defect::new(
            cursor.pos(),
            cursor.line_col(),
            "numeric lexeme failed to parse as f64",
        )
    })?;

    if cursor.current() == b'%' {
        cursor.advance();
        return Ok(TokenKind::Percentage { value, kind });
    }
    if starts_identifier(cursor) {
        let unit = consume_name(cursor);
        return Ok(TokenKind::Dimension { value, kind, unit });
    }
    Ok(TokenKind::Number { value, kind })
}

/// Would `e`/`E` at the cursor actually begin an exponent?
fn exponent_follows(cursor: &Cursor<'_>) -> bool {
    cursor.peek().is_ascii_digit()
        || (matches!(cursor.peek(), b'+' | b'-') && cursor.peek2().is_ascii_digit())
}
