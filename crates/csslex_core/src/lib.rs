//! Low-level machinery for the CSS tokenizer.
//!
//! This crate is standalone: it knows nothing about CSS token kinds. It
//! provides the byte-level [`Cursor`] over a borrowed source string, the
//! [`Span`]/[`LineCol`] position types, and the pass-by-value [`Mark`]
//! used to slice lexeme text out of the source.

mod cursor;
mod span;

pub use cursor::{Cursor, Mark};
pub use span::{LineCol, Span};
