//! The token model.
//!
//! One tagged enum covers every token the tokenizer can emit; the
//! per-kind payloads replace a subclass hierarchy. All `String`
//! payloads are fully decoded (escape sequences resolved), except
//! [`TokenKind::Comment`] which carries raw text.

use csslex_core::{LineCol, Span};

/// Whether a numeric lexeme was written as an integer.
///
/// A fractional part or an exponent makes it [`Number`](NumericKind::Number)
/// even when the value happens to be whole (`1e2` is not an integer lexeme).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Digits only (with optional sign): `42`, `-7`, `+0`.
    Integer,
    /// Has a decimal point or an exponent: `1.5`, `-.3`, `6e3`.
    Number,
}

/// A single lexical token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What kind of token this is, with its decoded payload.
    pub kind: TokenKind,
    /// Byte range of the raw lexeme in the source.
    pub span: Span,
    /// Line/column where the token begins.
    pub position: LineCol,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, position: LineCol) -> Self {
        Self {
            kind,
            span,
            position,
        }
    }

    /// Returns `true` for the zero-width token that terminates a run.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

/// Every kind of token, with decoded payloads.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// A run of spaces, tabs, and newlines, collapsed into one token.
    Whitespace,
    /// `/* ... */`, raw text including the delimiters. Only emitted
    /// when comment retention is enabled.
    Comment(String),

    /// An identifier: `color`, `-moz-linear-gradient`, `\61 bc`.
    Ident(String),
    /// An identifier directly followed by `(`; the payload is the name
    /// without the parenthesis. `url(` with an unquoted body lexes as
    /// [`Url`](TokenKind::Url) instead.
    Function(String),
    /// `@` + identifier; the payload omits the `@`.
    AtKeyword(String),
    /// `#` + identifier; the payload omits the `#`.
    Hash(String),

    /// A `"..."` or `'...'` string, decoded, quotes stripped.
    QuotedString(String),
    /// A string aborted by an unescaped newline. The payload is what
    /// was decoded before the newline; the newline itself is not part
    /// of the token.
    BadString(String),

    /// `url(...)` with the address decoded and whitespace trimmed.
    Url(String),
    /// A `url(` whose body was malformed. The payload is what was
    /// decoded before the scan went bad; the token's span covers the
    /// consumed remnants through the closing `)` or EOF.
    BadUrl(String),

    /// A numeric value, optionally signed: `12`, `-4.5`, `6e-2`.
    Number { value: f64, kind: NumericKind },
    /// A number directly followed by `%`.
    Percentage { value: f64, kind: NumericKind },
    /// A number directly followed by a unit identifier: `12px`, `-1.5em`.
    Dimension {
        value: f64,
        kind: NumericKind,
        unit: String,
    },

    /// `u+XXXX`, `u+XX??`, or `u+XXXX-YYYY`; the bounds are inclusive
    /// code point values with `start <= end`.
    UnicodeRange { start: u32, end: u32 },

    /// `~=`
    IncludeMatch,
    /// `|=`
    DashMatch,
    /// `^=`
    PrefixMatch,
    /// `$=`
    SuffixMatch,
    /// `*=`
    SubstringMatch,
    /// `||`
    Column,
    /// `<!--`
    Cdo,
    /// `-->`
    Cdc,

    Comma,
    Colon,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,

    /// Any character with no token of its own: `+` alone, `.` not
    /// starting a number, an invalid `\`, a stray `!`.
    Delim(char),

    /// Zero-width terminator; always the last token of a run.
    Eof,
}

impl TokenKind {
    /// A stable, lowercase name for the kind, for logs and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Comment(_) => "comment",
            Self::Ident(_) => "ident",
            Self::Function(_) => "function",
            Self::AtKeyword(_) => "at-keyword",
            Self::Hash(_) => "hash",
            Self::QuotedString(_) => "string",
            Self::BadString(_) => "bad-string",
            Self::Url(_) => "url",
            Self::BadUrl(_) => "bad-url",
            Self::Number { .. } => "number",
            Self::Percentage { .. } => "percentage",
            Self::Dimension { .. } => "dimension",
            Self::UnicodeRange { .. } => "unicode-range",
            Self::IncludeMatch => "include-match",
            Self::DashMatch => "dash-match",
            Self::PrefixMatch => "prefix-match",
            Self::SuffixMatch => "suffix-match",
            Self::SubstringMatch => "substring-match",
            Self::Column => "column",
            Self::Cdo => "cdo",
            Self::Cdc => "cdc",
            Self::Comma => "comma",
            Self::Colon => "colon",
            Self::Semicolon => "semicolon",
            Self::LeftParen => "left-paren",
            Self::RightParen => "right-paren",
            Self::LeftBracket => "left-bracket",
            Self::RightBracket => "right-bracket",
            Self::LeftBrace => "left-brace",
            Self::RightBrace => "right-brace",
            Self::Delim(_) => "delim",
            Self::Eof => "eof",
        }
    }
}
