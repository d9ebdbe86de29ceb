//! The at-keyword scanner: `@media`, `@-moz-keyframes`.

use csslex_core::Cursor;

use crate::escape::consume_name;
use crate::lex_error::Defect;
use crate::lookahead::starts_identifier;
use crate::token::TokenKind;

/// Scan an at-keyword. The cursor must sit on `@` with an identifier
/// start behind it; the dispatcher emits `Delim('@')` otherwise, so a
/// failed precondition here is a [`Defect`].
pub fn scan(cursor: &mut Cursor<'_>) -> Result<TokenKind, Defect> {
    if cursor.current() != b'@' {
        return Err(Defect::new(
            cursor.pos(),
            cursor.line_col(),
            "at-keyword scanner entered without `@`",
        ));
    }
    cursor.advance();
    if !starts_identifier(cursor) {
        return Err(Defect::new(
            cursor.pos(),
            cursor.line_col(),
            "at-keyword scanner entered without an identifier after `@`",
        ));
    }
    Ok(TokenKind::AtKeyword(consume_name(cursor)))
}
