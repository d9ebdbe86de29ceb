//! A CSS tokenizer.
//!
//! Converts raw source text into a flat stream of typed tokens per the
//! token-level grammar of CSS Syntax: identifiers, functions,
//! at-keywords, hashes, strings, urls, numerics, unicode-ranges, match
//! operators, and punctuation, each with its byte span and line/column
//! position. Malformed strings and urls come back as `BadString` /
//! `BadUrl` recovery tokens; unclaimed characters become single-char
//! `Delim` tokens, so every input tokenizes to EOF.
//!
//! String payloads are fully decoded: `\61 bc` is the identifier
//! `abc` by the time you see it.
//!
//! ```
//! use csslex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("color: red;")?;
//! assert_eq!(tokens[0].kind, TokenKind::Ident("color".into()));
//! assert!(tokens.last().is_some_and(|t| t.is_eof()));
//! # Ok::<(), csslex::Error>(())
//! ```
//!
//! Comments are scanned but dropped by default; keep them with
//! [`Tokenizer::retain_comments`]. With retention on, the token spans
//! tile the source exactly.

mod at_keyword;
mod comment;
mod escape;
mod ident;
mod lex_error;
mod lookahead;
mod number;
mod string;
mod token;
mod tokenizer;
mod unicode_range;
mod url;

pub use csslex_core::{LineCol, Span};
pub use lex_error::{Defect, Error, LexError, LexErrorKind};
pub use token::{NumericKind, Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Tokenize `source` with the default configuration (comments
/// discarded).
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Tokenizer::new(source).run()
}
