#![allow(clippy::unwrap_used)]

use csslex_core::{LineCol, Span};
use pretty_assertions::assert_eq;

use super::Tokenizer;
use crate::lex_error::{Error, LexErrorKind};
use crate::token::{NumericKind, Token, TokenKind};
use TokenKind::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    Tokenizer::new(src)
        .run()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn tokens(src: &str) -> Vec<Token> {
    Tokenizer::new(src).run().unwrap()
}

fn int(value: f64) -> TokenKind {
    Number {
        value,
        kind: NumericKind::Integer,
    }
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(kinds(""), vec![Eof]);
}

#[test]
fn whitespace_run_collapses_into_one_token() {
    assert_eq!(kinds("  \t\n "), vec![Whitespace, Eof]);
}

#[test]
fn simple_declaration() {
    assert_eq!(
        kinds("color: red;"),
        vec![
            Ident("color".into()),
            Colon,
            Whitespace,
            Ident("red".into()),
            Semicolon,
            Eof
        ]
    );
}

// === Hashes and at-keywords ===

#[test]
fn hash_with_identifier() {
    assert_eq!(kinds("#main"), vec![Hash("main".into()), Eof]);
}

#[test]
fn hash_before_digits_is_a_delim() {
    assert_eq!(kinds("#123"), vec![Delim('#'), int(123.0), Eof]);
}

#[test]
fn at_keyword() {
    assert_eq!(kinds("@media"), vec![AtKeyword("media".into()), Eof]);
}

#[test]
fn vendor_prefixed_at_keyword() {
    assert_eq!(
        kinds("@-moz-media"),
        vec![AtKeyword("-moz-media".into()), Eof]
    );
}

#[test]
fn bare_at_is_a_delim() {
    assert_eq!(
        kinds("@ x"),
        vec![Delim('@'), Whitespace, Ident("x".into()), Eof]
    );
}

// === Numerics ===

#[test]
fn number_percentage_dimension() {
    assert_eq!(
        kinds("12px 50% 1.5"),
        vec![
            Dimension {
                value: 12.0,
                kind: NumericKind::Integer,
                unit: "px".into()
            },
            Whitespace,
            Percentage {
                value: 50.0,
                kind: NumericKind::Integer
            },
            Whitespace,
            Number {
                value: 1.5,
                kind: NumericKind::Number
            },
            Eof
        ]
    );
}

#[test]
fn signed_exponent_number() {
    assert_eq!(
        kinds("+12.5e-2"),
        vec![
            Number {
                value: 0.125,
                kind: NumericKind::Number
            },
            Eof
        ]
    );
}

#[test]
fn lone_sign_and_dot_are_delims() {
    assert_eq!(kinds("+"), vec![Delim('+'), Eof]);
    assert_eq!(kinds(". "), vec![Delim('.'), Whitespace, Eof]);
}

#[test]
fn numeric_grammar_violation_aborts_the_run() {
    let err = Tokenizer::new("width: 12.;").run().unwrap_err();
    match err {
        Error::Lex(e) => {
            assert_eq!(e.kind, LexErrorKind::TrailingDecimalPoint);
            assert_eq!(e.span.start, 7);
            assert_eq!(e.position, LineCol { line: 1, column: 8 });
        }
        Error::Defect(d) => panic!("expected lex error, got defect: {d}"),
    }
}

// === Identifiers, functions, urls ===

#[test]
fn escaped_identifier() {
    assert_eq!(kinds("\\61 bc"), vec![Ident("abc".into()), Eof]);
}

#[test]
fn invalid_backslash_is_a_delim() {
    assert_eq!(
        kinds("\\\nx"),
        vec![Delim('\\'), Whitespace, Ident("x".into()), Eof]
    );
}

#[test]
fn function_call_shape() {
    assert_eq!(
        kinds("calc(100% - 2px)"),
        vec![
            Function("calc".into()),
            Percentage {
                value: 100.0,
                kind: NumericKind::Integer
            },
            Whitespace,
            Delim('-'),
            Whitespace,
            Dimension {
                value: 2.0,
                kind: NumericKind::Integer,
                unit: "px".into()
            },
            RightParen,
            Eof
        ]
    );
}

#[test]
fn url_token() {
    assert_eq!(
        kinds("url( http://a.com/x.png )"),
        vec![Url("http://a.com/x.png".into()), Eof]
    );
}

#[test]
fn bad_url_recovers_and_continues() {
    assert_eq!(
        kinds("url(a b) x"),
        vec![BadUrl("a".into()), Whitespace, Ident("x".into()), Eof]
    );
}

// === Strings ===

#[test]
fn both_quote_kinds() {
    assert_eq!(
        kinds("\"x\" 'y'"),
        vec![
            QuotedString("x".into()),
            Whitespace,
            QuotedString("y".into()),
            Eof
        ]
    );
}

#[test]
fn bad_string_leaves_the_newline_for_whitespace() {
    assert_eq!(
        kinds("\"a\nb"),
        vec![BadString("a".into()), Whitespace, Ident("b".into()), Eof]
    );
}

// === Unicode ranges ===

#[test]
fn unicode_range_in_context() {
    assert_eq!(
        kinds("u+400-4ff,u+26"),
        vec![
            UnicodeRange {
                start: 0x400,
                end: 0x4FF
            },
            Comma,
            UnicodeRange {
                start: 0x26,
                end: 0x26
            },
            Eof
        ]
    );
}

#[test]
fn u_without_plus_is_an_identifier() {
    assert_eq!(kinds("unicorn"), vec![Ident("unicorn".into()), Eof]);
}

#[test]
fn u_plus_without_hex_is_not_a_range() {
    assert_eq!(
        kinds("u+z"),
        vec![Ident("u".into()), Delim('+'), Ident("z".into()), Eof]
    );
}

// === Match operators, CDO/CDC, punctuation ===

#[test]
fn match_operators() {
    assert_eq!(
        kinds("~=|=^=$=*=||"),
        vec![
            IncludeMatch,
            DashMatch,
            PrefixMatch,
            SuffixMatch,
            SubstringMatch,
            Column,
            Eof
        ]
    );
}

#[test]
fn lone_pipe_is_a_delim() {
    assert_eq!(kinds("|x"), vec![Delim('|'), Ident("x".into()), Eof]);
}

#[test]
fn cdo_and_cdc() {
    assert_eq!(kinds("<!--"), vec![Cdo, Eof]);
    assert_eq!(kinds("-->"), vec![Cdc, Eof]);
}

#[test]
fn truncated_cdo_falls_apart() {
    assert_eq!(
        kinds("<!-"),
        vec![Delim('<'), Delim('!'), Delim('-'), Eof]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds(",:;()[]{}"),
        vec![
            Comma,
            Colon,
            Semicolon,
            LeftParen,
            RightParen,
            LeftBracket,
            RightBracket,
            LeftBrace,
            RightBrace,
            Eof
        ]
    );
}

// === Comments ===

#[test]
fn comments_are_discarded_by_default() {
    assert_eq!(
        kinds("a/* note */b"),
        vec![Ident("a".into()), Ident("b".into()), Eof]
    );
}

#[test]
fn comments_are_kept_on_request() {
    let kinds: Vec<_> = Tokenizer::new("a/* note */b")
        .retain_comments(true)
        .run()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            Ident("a".into()),
            Comment("/* note */".into()),
            Ident("b".into()),
            Eof
        ]
    );
}

// === Odd bytes ===

#[test]
fn interior_null_byte_is_a_delim() {
    assert_eq!(
        kinds("a\0b"),
        vec![Ident("a".into()), Delim('\0'), Ident("b".into()), Eof]
    );
}

#[test]
fn carriage_return_is_a_delim() {
    assert_eq!(kinds("a\rb"), vec![Ident("a".into()), Delim('\r'), Ident("b".into()), Eof]);
}

#[test]
fn non_ascii_lexes_as_an_identifier() {
    assert_eq!(kinds("€"), vec![Ident("€".into()), Eof]);
}

// === Spans and positions ===

#[test]
fn spans_and_positions() {
    let toks = tokens("a\n bc");
    assert_eq!(toks.len(), 4);

    assert_eq!(toks[0].kind, Ident("a".into()));
    assert_eq!(toks[0].span, Span::new(0, 1));
    assert_eq!(toks[0].position, LineCol { line: 1, column: 1 });

    assert_eq!(toks[1].kind, Whitespace);
    assert_eq!(toks[1].span, Span::new(1, 3));
    assert_eq!(toks[1].position, LineCol { line: 1, column: 2 });

    assert_eq!(toks[2].kind, Ident("bc".into()));
    assert_eq!(toks[2].span, Span::new(3, 5));
    assert_eq!(toks[2].position, LineCol { line: 2, column: 2 });

    assert!(toks[3].is_eof());
    assert_eq!(toks[3].span, Span::point(5));
}

#[test]
fn eof_token_is_zero_width_and_last() {
    let toks = tokens("a b");
    let last = toks.last().unwrap();
    assert!(last.is_eof());
    assert!(last.span.is_empty());
    assert_eq!(last.span.start, 3);
}

#[test]
fn retained_run_covers_the_source_losslessly() {
    let src = "a /* c */ b{x:url(p q)}\"s\n";
    let toks = Tokenizer::new(src).retain_comments(true).run().unwrap();
    let mut expected_start = 0;
    let mut rebuilt = String::new();
    for token in &toks {
        assert_eq!(token.span.start, expected_start, "gap before {:?}", token.kind);
        expected_start = token.span.end;
        rebuilt.push_str(&src[token.span.start as usize..token.span.end as usize]);
    }
    assert_eq!(rebuilt, src);
}
