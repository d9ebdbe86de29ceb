//! The dispatch loop: one byte (plus up to two of lookahead) selects
//! a sub-scanner or a fixed token; anything unclaimed falls back to a
//! single-character `Delim`, so every iteration makes progress and
//! every input tokenizes to EOF.

use csslex_core::{Cursor, Mark, Span};
use tracing::trace;

use crate::escape::consume_name;
use crate::lex_error::Error;
use crate::lookahead::{is_valid_escape, is_whitespace, starts_identifier, starts_number};
use crate::token::{Token, TokenKind};
use crate::{at_keyword, comment, ident, number, string, unicode_range};

/// The tokenizer. Borrows the source for its lifetime; configured via
/// builder-style setters, consumed by [`run`](Tokenizer::run).
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    retain_comments: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            retain_comments: false,
        }
    }

    /// Keep comment tokens in the output. Off by default: comments are
    /// scanned either way (their text can span anything), just not
    /// appended.
    #[must_use]
    pub fn retain_comments(mut self, retain: bool) -> Self {
        self.retain_comments = retain;
        self
    }

    /// Tokenize the whole source eagerly.
    ///
    /// On success the vector always ends with a zero-width
    /// [`Eof`](TokenKind::Eof) token. The only failures are the
    /// numeric/unicode-range grammar violations and internal defects;
    /// all other malformed input comes back as recovery tokens.
    pub fn run(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        while !self.cursor.is_eof() {
            let start = self.cursor.mark();
            let Some(kind) = self.next_kind(start)? else {
                continue; // discarded comment
            };
            debug_assert!(self.cursor.pos() > start.pos, "dispatch must make progress");
            if matches!(kind, TokenKind::BadString(_) | TokenKind::BadUrl(_)) {
                trace!(kind = kind.name(), at = %start.at, "emitting recovery token");
            }
            tokens.push(Token::new(
                kind,
                Span::new(start.pos, self.cursor.pos()),
                start.at,
            ));
        }
        tokens.push(Token::new(
            TokenKind::Eof,
            Span::point(self.cursor.pos()),
            self.cursor.line_col(),
        ));
        Ok(tokens)
    }

    /// Scan one token. `None` means a token was consumed but not kept
    /// (a comment with retention off).
    fn next_kind(&mut self, start: Mark) -> Result<Option<TokenKind>, Error> {
        let cursor = &mut self.cursor;
        let kind = match cursor.current() {
            b' ' | b'\t' | b'\n' => {
                cursor.eat_while(is_whitespace);
                TokenKind::Whitespace
            }
            b'"' | b'\'' => string::scan(cursor),
            b'/' if cursor.peek() == b'*' => {
                let comment = comment::scan(cursor)?;
                if !self.retain_comments {
                    return Ok(None);
                }
                comment
            }
            b'#' if ident_follows(cursor) => {
                cursor.advance();
                TokenKind::Hash(consume_name(cursor))
            }
            b'@' if ident_follows(cursor) => at_keyword::scan(cursor)?,
            b'u' | b'U'
                if cursor.peek() == b'+'
                    && (cursor.peek2().is_ascii_hexdigit() || cursor.peek2() == b'?') =>
            {
                unicode_range::scan(cursor, start)?
            }
            b'0'..=b'9' => number::scan(cursor, start)?,
            b'.' | b'+' if starts_number(cursor) => number::scan(cursor, start)?,
            b'-' => {
                if starts_number(cursor) {
                    number::scan(cursor, start)?
                } else if cursor.peek() == b'-' && cursor.peek2() == b'>' {
                    cursor.advance_n(3);
                    TokenKind::Cdc
                } else if starts_identifier(cursor) {
                    ident::scan(cursor)
                } else {
                    cursor.advance();
                    TokenKind::Delim('-')
                }
            }
            b'<' if cdo_follows(cursor) => {
                cursor.advance_n(4);
                TokenKind::Cdo
            }
            b'~' if cursor.peek() == b'=' => {
                cursor.advance_n(2);
                TokenKind::IncludeMatch
            }
            b'|' if cursor.peek() == b'=' => {
                cursor.advance_n(2);
                TokenKind::DashMatch
            }
            b'|' if cursor.peek() == b'|' => {
                cursor.advance_n(2);
                TokenKind::Column
            }
            b'^' if cursor.peek() == b'=' => {
                cursor.advance_n(2);
                TokenKind::PrefixMatch
            }
            b'$' if cursor.peek() == b'=' => {
                cursor.advance_n(2);
                TokenKind::SuffixMatch
            }
            b'*' if cursor.peek() == b'=' => {
                cursor.advance_n(2);
                TokenKind::SubstringMatch
            }
            b',' => fixed(cursor, TokenKind::Comma),
            b':' => fixed(cursor, TokenKind::Colon),
            b';' => fixed(cursor, TokenKind::Semicolon),
            b'(' => fixed(cursor, TokenKind::LeftParen),
            b')' => fixed(cursor, TokenKind::RightParen),
            b'[' => fixed(cursor, TokenKind::LeftBracket),
            b']' => fixed(cursor, TokenKind::RightBracket),
            b'{' => fixed(cursor, TokenKind::LeftBrace),
            b'}' => fixed(cursor, TokenKind::RightBrace),
            b'\\' if is_valid_escape(cursor) => ident::scan(cursor),
            _ if starts_identifier(cursor) => ident::scan(cursor),
            // Everything else, one character at a time. Covers `!`,
            // a lone `+` or `.`, `\r`, an invalid `\`, interior NULs.
            _ => {
                let mark = cursor.mark();
                cursor.advance_char();
                let ch = cursor.take(mark).chars().next().unwrap_or('\u{FFFD}');
                TokenKind::Delim(ch)
            }
        };
        Ok(Some(kind))
    }
}

fn fixed(cursor: &mut Cursor<'_>, kind: TokenKind) -> TokenKind {
    cursor.advance();
    kind
}

/// Does an identifier start right after the current byte?
fn ident_follows(cursor: &Cursor<'_>) -> bool {
    let mut probe = *cursor;
    probe.advance();
    starts_identifier(&probe)
}

/// Is the cursor on the full `<!--` opener?
fn cdo_follows(cursor: &Cursor<'_>) -> bool {
    if cursor.peek() != b'!' || cursor.peek2() != b'-' {
        return false;
    }
    let mut probe = *cursor;
    probe.advance_n(3);
    probe.current() == b'-'
}

#[cfg(test)]
mod tests;
