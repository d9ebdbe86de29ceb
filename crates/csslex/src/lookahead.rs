//! Non-consuming classification of what the cursor is looking at.
//!
//! Every function here inspects at most three bytes via
//! `current`/`peek`/`peek2` and never moves the cursor; the dispatcher
//! and scanners call these to choose a branch before consuming.

use csslex_core::Cursor;

/// A byte that can begin a name: ASCII letter, `_`, or any non-ASCII
/// byte (UTF-8 lead and continuation bytes are all `>= 0x80`).
#[inline]
pub fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

/// A byte that can continue a name: name-start, digit, or `-`.
#[inline]
pub fn is_name_char(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit() || b == b'-'
}

/// Space, tab, or newline. `\r` is not whitespace here; input is
/// expected to be newline-normalized before tokenizing.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

/// Returns `true` if the cursor sits on `\` beginning a valid escape.
///
/// `\` followed by a newline is not an escape (outside strings it is
/// a lone delimiter; inside strings it is a line continuation), and
/// `\` as the very last byte of the source escapes nothing.
#[inline]
pub fn is_valid_escape(cursor: &Cursor<'_>) -> bool {
    cursor.current() == b'\\' && cursor.peek() != b'\n' && cursor.pos() + 1 < cursor.source_len()
}

/// Returns `true` if the next 1–3 bytes begin an identifier.
///
/// Covers the three identifier openings: a name-start byte, `-`
/// followed by a name-start / another `-` / a valid escape, and `\`
/// beginning a valid escape.
pub fn starts_identifier(cursor: &Cursor<'_>) -> bool {
    match cursor.current() {
        b'-' => {
            let next = cursor.peek();
            is_name_start(next)
                || next == b'-'
                || (next == b'\\'
                    && cursor.peek2() != b'\n'
                    && cursor.pos() + 2 < cursor.source_len())
        }
        b'\\' => is_valid_escape(cursor),
        b => is_name_start(b),
    }
}

/// Returns `true` if the next 1–3 bytes begin a numeric literal.
///
/// A sign or a leading dot counts only when digits actually follow;
/// `+` alone or `.5em`'s dot-without-digit stay delimiters.
pub fn starts_number(cursor: &Cursor<'_>) -> bool {
    match cursor.current() {
        b'0'..=b'9' => true,
        b'.' => cursor.peek().is_ascii_digit(),
        b'+' | b'-' => {
            cursor.peek().is_ascii_digit()
                || (cursor.peek() == b'.' && cursor.peek2().is_ascii_digit())
        }
        _ => false,
    }
}
