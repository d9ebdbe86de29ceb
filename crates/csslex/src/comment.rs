//! The comment scanner: `/* ... */`.

use csslex_core::Cursor;

use crate::lex_error::Defect;
use crate::token::TokenKind;

/// Scan a comment. The cursor must sit on the `/` of `/*`; anything
/// else is a dispatch bug, reported as a [`Defect`].
///
/// The payload is the raw text, delimiters included, with no escape
/// processing. A comment still open at EOF ends there.
pub fn scan(cursor: &mut Cursor<'_>) -> Result<TokenKind, Defect> {
    if cursor.current() != b'/' || cursor.peek() != b'*' {
        return Err(Defect::new(
            cursor.pos(),
            cursor.line_col(),
            "comment scanner entered without `/*`",
        ));
    }
    let mark = cursor.mark();
    cursor.advance_n(2);
    cursor.skip_past_comment_close();
    Ok(TokenKind::Comment(cursor.take(mark).to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_comment() {
        let mut cursor = Cursor::new("/* note */ body");
        let kind = scan(&mut cursor).unwrap();
        assert_eq!(kind, TokenKind::Comment("/* note */".into()));
        assert_eq!(cursor.current(), b' ');
    }

    #[test]
    fn comment_keeps_raw_text() {
        let mut cursor = Cursor::new("/* \\61 is not an escape here */");
        let kind = scan(&mut cursor).unwrap();
        assert_eq!(
            kind,
            TokenKind::Comment("/* \\61 is not an escape here */".into())
        );
    }

    #[test]
    fn stars_inside_comment() {
        let mut cursor = Cursor::new("/*** x ***/y");
        let kind = scan(&mut cursor).unwrap();
        assert_eq!(kind, TokenKind::Comment("/*** x ***/".into()));
        assert_eq!(cursor.current(), b'y');
    }

    #[test]
    fn unterminated_comment_runs_to_eof() {
        let mut cursor = Cursor::new("/* never closed");
        let kind = scan(&mut cursor).unwrap();
        assert_eq!(kind, TokenKind::Comment("/* never closed".into()));
        assert!(cursor.is_eof());
    }

    #[test]
    fn multiline_comment() {
        let mut cursor = Cursor::new("/* a\nb */");
        let kind = scan(&mut cursor).unwrap();
        assert_eq!(kind, TokenKind::Comment("/* a\nb */".into()));
    }

    #[test]
    fn wrong_entry_point_is_a_defect() {
        let mut cursor = Cursor::new("// not a css comment");
        let defect = scan(&mut cursor).unwrap_err();
        assert_eq!(defect.offset, 0);
    }
}
