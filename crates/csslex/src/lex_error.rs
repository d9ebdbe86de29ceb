//! Error types for the tokenizer.
//!
//! Two disjoint families:
//!
//! - [`LexError`]: the input is malformed in one of the few ways the
//!   grammar rejects outright instead of recovering from. Only the
//!   numeric scanner and the unicode-range scanner raise these; every
//!   other malformed construct becomes a `BadString`, `BadUrl`, or
//!   `Delim` token and the run continues.
//! - [`Defect`]: the tokenizer itself broke an internal invariant
//!   (a sub-scanner was entered without its precondition character).
//!   A defect is a bug here, never a statement about the input; it
//!   carries the construction site as a breadcrumb.
//!
//! [`Error`] combines the two for the public `run()` signature.

use std::panic::Location;

use csslex_core::{LineCol, Span};
use thiserror::Error;

/// A structured error for input the grammar rejects.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    /// Byte range of the offending lexeme (up to the point of error).
    pub span: Span,
    /// Where the offending lexeme begins.
    pub position: LineCol,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of grammar violation occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A numeric literal ends on its decimal point (`12.`).
    #[error("numeric literal ends with a decimal point")]
    TrailingDecimalPoint,
    /// A numeric literal's fraction is followed by another dot (`1.2.3`).
    #[error("numeric literal has a second decimal point")]
    SecondDecimalPoint,
    /// A numeric literal's exponent is followed by another (`1e2e3`).
    #[error("numeric literal has a second exponent")]
    SecondExponent,
    /// A unicode-range whose end bound is below its start (`u+500-400`).
    #[error("unicode-range end precedes its start")]
    InvertedUnicodeRange,
}

impl LexError {
    /// `12.`: the digits stop right after the dot.
    #[cold]
    pub fn trailing_decimal_point(span: Span, position: LineCol) -> Self {
        Self {
            span,
            position,
            kind: LexErrorKind::TrailingDecimalPoint,
        }
    }

    /// `1.2.3`: a second dot directly after a complete number.
    #[cold]
    pub fn second_decimal_point(span: Span, position: LineCol) -> Self {
        Self {
            span,
            position,
            kind: LexErrorKind::SecondDecimalPoint,
        }
    }

    /// `1e2e3`: a second exponent directly after a complete number.
    #[cold]
    pub fn second_exponent(span: Span, position: LineCol) -> Self {
        Self {
            span,
            position,
            kind: LexErrorKind::SecondExponent,
        }
    }

    /// `u+500-400`: both bounds parsed, in the wrong order.
    #[cold]
    pub fn inverted_unicode_range(span: Span, position: LineCol) -> Self {
        Self {
            span,
            position,
            kind: LexErrorKind::InvertedUnicodeRange,
        }
    }
}

/// An internal invariant violation inside the tokenizer.
///
/// `location` records where in *this* codebase the defect was raised,
/// via [`Location::caller`]; `offset`/`position` record where in the
/// input the cursor stood.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("internal tokenizer defect at {position}: {detail} (raised at {location})")]
pub struct Defect {
    /// Byte offset of the cursor when the invariant failed.
    pub offset: u32,
    /// Line/column of the cursor when the invariant failed.
    pub position: LineCol,
    /// Which invariant failed.
    pub detail: &'static str,
    /// Source location of the raise site.
    pub location: &'static Location<'static>,
}

impl Defect {
    /// Record a defect at the caller's source location.
    #[cold]
    #[track_caller]
    pub fn new(offset: u32, position: LineCol, detail: &'static str) -> Self {
        Self {
            offset,
            position,
            detail,
            location: Location::caller(),
        }
    }
}

/// Everything a tokenizer run can fail with.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// The input violated the grammar in a non-recoverable way.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokenizer violated one of its own invariants.
    #[error(transparent)]
    Defect(#[from] Defect),
}
