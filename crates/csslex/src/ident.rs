//! The ident scanner: identifiers, functions, and the `url(` handoff.

use csslex_core::Cursor;

use crate::escape::consume_name;
use crate::token::TokenKind;
use crate::url;

/// Scan an identifier. The cursor must sit on an identifier start
/// (the dispatcher has already checked `starts_identifier`).
///
/// A `(` directly after the name makes it a function token, except
/// for `url` (matched case-insensitively, escapes already decoded),
/// which hands off to the url scanner.
pub fn scan(cursor: &mut Cursor<'_>) -> TokenKind {
    let name = consume_name(cursor);
    if cursor.current() == b'(' {
        cursor.advance();
        if name.eq_ignore_ascii_case("url") {
            return url::scan(cursor);
        }
        return TokenKind::Function(name);
    }
    TokenKind::Ident(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan_ident(src: &str) -> TokenKind {
        scan(&mut Cursor::new(src))
    }

    #[test]
    fn plain_ident() {
        assert_eq!(scan_ident("color:"), TokenKind::Ident("color".into()));
    }

    #[test]
    fn function() {
        assert_eq!(
            scan_ident("calc(100% - 2px)"),
            TokenKind::Function("calc".into())
        );
    }

    #[test]
    fn space_before_paren_stays_an_ident() {
        assert_eq!(scan_ident("calc ("), TokenKind::Ident("calc".into()));
    }

    #[test]
    fn url_hands_off() {
        assert_eq!(
            scan_ident("url(x.png)"),
            TokenKind::Url("x.png".into())
        );
    }

    #[test]
    fn url_is_case_insensitive() {
        assert_eq!(scan_ident("URL(a)"), TokenKind::Url("a".into()));
        assert_eq!(scan_ident("Url(a)"), TokenKind::Url("a".into()));
    }

    #[test]
    fn escaped_url_name_still_hands_off() {
        // "\75 rl(" decodes to "url(".
        assert_eq!(scan_ident("\\75 rl(a)"), TokenKind::Url("a".into()));
    }

    #[test]
    fn url_like_name_without_paren_is_an_ident() {
        assert_eq!(scan_ident("url "), TokenKind::Ident("url".into()));
    }

    #[test]
    fn escaped_function_name_is_decoded() {
        assert_eq!(
            scan_ident("\\63 alc("),
            TokenKind::Function("calc".into())
        );
    }
}
