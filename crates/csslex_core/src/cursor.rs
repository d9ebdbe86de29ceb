//! Single-lookahead cursor over a borrowed source string.
//!
//! The cursor advances byte-by-byte and reports `0x00` once the end of
//! the source is reached, so scanning loops terminate on EOF without a
//! separate bounds check at every call site. The source is borrowed for
//! the duration of the run, never copied.
//!
//! The cursor is [`Copy`]: saving a copy and assigning it back is the
//! backtracking mechanism for bounded (1–3 character) lookahead. There
//! is no unbounded rewind.
//!
//! # Interior Null Bytes
//!
//! A `&str` may legally contain U+0000. `current()` returns `0` for it
//! just as it does at EOF; callers that care use [`is_eof()`](Cursor::is_eof)
//! to distinguish the two.

use crate::span::LineCol;

/// A recorded start offset and position, used to slice a lexeme's text
/// out of the source once its end has been found.
///
/// Marks are plain values: several may be alive at once and they are
/// threaded explicitly from [`Cursor::mark`] into [`Cursor::take`],
/// so there is no open-anchor state to leak between scanner calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Byte offset the mark was taken at.
    pub pos: u32,
    /// Line/column the mark was taken at.
    pub at: LineCol,
}

/// Byte cursor with line/column tracking.
///
/// Line and column advance per the newline rule: `\n` increments the
/// line and resets the column; any other character increments the
/// column. UTF-8 continuation bytes do not move the column, so columns
/// count characters even though the cursor steps bytes.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: u32,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    ///
    /// Sources larger than `u32::MAX` bytes are not supported; the
    /// offset arithmetic throughout the tokenizer is 32-bit.
    pub fn new(src: &'a str) -> Self {
        debug_assert!(
            u32::try_from(src.len()).is_ok(),
            "source exceeds u32::MAX bytes"
        );
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    /// Returns the byte at the current position without advancing.
    ///
    /// Returns `0x00` at EOF. Repeated calls without an intervening
    /// advance return the same byte.
    #[inline]
    pub fn current(&self) -> u8 {
        self.bytes().get(self.pos as usize).copied().unwrap_or(0)
    }

    /// Returns the byte one position ahead, or `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.bytes()
            .get(self.pos as usize + 1)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the byte two positions ahead, or `0x00` past EOF.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.bytes()
            .get(self.pos as usize + 2)
            .copied()
            .unwrap_or(0)
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.src.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        // Length fits in u32, checked in new().
        #[allow(clippy::cast_possible_truncation)]
        {
            self.src.len() as u32
        }
    }

    /// Current line/column position.
    #[inline]
    pub fn line_col(&self) -> LineCol {
        LineCol {
            line: self.line,
            column: self.column,
        }
    }

    /// Advance the cursor by one byte, updating line/column.
    ///
    /// A no-op at EOF: the cursor never moves past the end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&b) = self.bytes().get(self.pos as usize) else {
            return;
        };
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_utf8_continuation(b) {
            self.column += 1;
        }
    }

    /// Advance the cursor by `n` bytes (stopping at EOF).
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.advance_n(utf8_char_width(self.current()));
    }

    /// Record the current offset and position as a mark.
    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            at: self.line_col(),
        }
    }

    /// Extract the source slice from `mark` to the current position.
    pub fn take(&self, mark: Mark) -> &'a str {
        debug_assert!(
            mark.pos <= self.pos,
            "mark at {} is ahead of cursor at {}",
            mark.pos,
            self.pos
        );
        debug_assert!(self.src.is_char_boundary(mark.pos as usize));
        debug_assert!(self.src.is_char_boundary(self.pos as usize));
        &self.src[mark.pos as usize..self.pos as usize]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` is never consulted past EOF; the loop always
    /// terminates at the end of input.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance the cursor to the absolute byte offset `target`,
    /// updating line/column for every byte skipped.
    fn advance_to(&mut self, target: usize) {
        debug_assert!(target >= self.pos as usize && target <= self.src.len());
        for &b in &self.bytes()[self.pos as usize..target] {
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else if !is_utf8_continuation(b) {
                self.column += 1;
            }
        }
        // target <= src.len() <= u32::MAX.
        #[allow(clippy::cast_possible_truncation)]
        {
            self.pos = target as u32;
        }
    }

    /// Advance past ordinary string content to the next interesting
    /// byte and return it, or `0` for EOF.
    ///
    /// "Interesting" bytes for CSS strings: the closing quote, `\`,
    /// and `\n`. Uses memchr3 for the search; the cursor stops *at*
    /// the found byte without consuming it.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let remaining = &self.bytes()[self.pos as usize..];
        match memchr::memchr3(quote, b'\\', b'\n', remaining) {
            Some(offset) => {
                self.advance_to(self.pos as usize + offset);
                self.current()
            }
            None => {
                self.advance_to(self.src.len());
                0
            }
        }
    }

    /// Advance past the next `*/` sequence.
    ///
    /// Returns `true` and leaves the cursor just after the `*/` when
    /// found; otherwise advances to EOF and returns `false`.
    pub fn skip_past_comment_close(&mut self) -> bool {
        let remaining = &self.bytes()[self.pos as usize..];
        match memchr::memmem::find(remaining, b"*/") {
            Some(offset) => {
                self.advance_to(self.pos as usize + offset + 2);
                true
            }
            None => {
                self.advance_to(self.src.len());
                false
            }
        }
    }
}

/// Returns `true` for UTF-8 continuation bytes (`0b10xx_xxxx`).
#[inline]
fn is_utf8_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
#[inline]
fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
