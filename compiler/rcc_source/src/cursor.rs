//! Position-tracking cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte-by-byte. EOF is detected when the current byte
//! equals the sentinel (`0x00`) and the position has reached the source
//! length; an interior null at `pos < source_len` is *not* EOF (it scans as
//! an unknown character). No bounds checking is needed in the common case
//! because the sentinel guarantees termination.
//!
//! Unlike a plain byte cursor, this one also tracks the 1-based line and
//! 0-based column of the current position. Columns count *characters*, not
//! bytes: [`advance()`](Cursor::advance) is for bytes known to be ASCII,
//! [`advance_char()`](Cursor::advance_char) steps one full UTF-8 character
//! for a single column, and [`eat_newline()`](Cursor::eat_newline) folds
//! `\r\n`, `\r`, and `\n` into one logical newline that resets the column.

/// Count the characters in a UTF-8 byte slice without decoding.
///
/// Every non-continuation byte (top bits != `10`) starts a character.
#[inline]
fn utf8_char_count(bytes: &[u8]) -> u32 {
    let count = bytes.iter().filter(|&&b| (b & 0xC0) != 0x80).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Cursor over a sentinel-terminated byte buffer with line/column tracking.
///
/// Created via [`SourceFile::cursor()`](crate::SourceFile::cursor).
/// The cursor is [`Copy`], so scanner state snapshots are cheap.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00`. This is guaranteed by
/// [`SourceFile`](crate::SourceFile) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
    /// 1-based line of the current position.
    line: u32,
    /// 0-based column (in characters) of the current position.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0, line 1, column 0.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` (sentinel), as must every byte
    /// after it. Guaranteed by `SourceFile::new()`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
            line: 1,
            column: 0,
        }
    }

    /// The byte at the current position.
    ///
    /// Returns `0x00` at EOF (the sentinel). Interior null bytes also
    /// return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding guarantee valid
    /// reads beyond the source content.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// The byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Advance one byte, counting one column.
    ///
    /// Only valid for single-byte (ASCII) characters; multi-byte characters
    /// must go through [`advance_char()`](Self::advance_char) so the column
    /// count stays per-character. Newlines must go through
    /// [`eat_newline()`](Self::eat_newline).
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
        self.column += 1;
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// EOF is the sentinel (`0x00`) at or past the source length; an
    /// interior null byte is not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Returns `true` if the current byte starts a newline sequence.
    #[inline]
    pub fn at_newline(&self) -> bool {
        matches!(self.current(), b'\r' | b'\n')
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// 1-based line of the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 0-based column (in characters) of the current position.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content (`end <= source_len`)
    /// and on UTF-8 character boundaries. Both hold when the offsets come
    /// from the scanner's token boundary tracking, since the source was
    /// originally valid UTF-8.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on source originally validated as &str"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: the buffer was constructed from `&str` (valid UTF-8) and
        // the scanner keeps start/end on character boundaries.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte, counting
    /// one column per byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` (true for all standard ASCII byte
    /// classifiers), and `pred` must only accept single-byte characters so
    /// the column count stays honest.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
            self.column += 1;
        }
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode the full character at the current position.
    ///
    /// Returns `'\0'` at EOF (the sentinel decodes as NUL).
    #[inline]
    pub fn current_char(&self) -> char {
        let b = self.current();
        if b < 0x80 {
            return b as char;
        }
        let width = Self::utf8_char_width(b) as usize;
        let end = (self.pos as usize + width).min(self.source_len as usize);
        let bytes = &self.buf[self.pos as usize..end];
        std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Advance past one full UTF-8 character, counting one column.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos += width;
        self.column += 1;
    }

    /// Consume one logical newline (`\r\n`, `\r`, or `\n`), incrementing
    /// the line and resetting the column to 0.
    ///
    /// # Contract
    ///
    /// The current byte must be `\r` or `\n`.
    pub fn eat_newline(&mut self) {
        debug_assert!(self.at_newline(), "eat_newline off a newline byte");
        if self.current() == b'\r' {
            self.pos += 1;
            if self.current() == b'\n' {
                self.pos += 1;
            }
        } else {
            self.pos += 1;
        }
        self.line += 1;
        self.column = 0;
    }

    /// Advance to the next `\r`, `\n`, or EOF using SIMD-accelerated search,
    /// updating the column by the number of characters skipped.
    ///
    /// Used by the line-comment scanner. The newline itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_to_line_end(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let end = memchr::memchr2(b'\r', b'\n', remaining).unwrap_or(remaining.len());
        self.column += utf8_char_count(&remaining[..end]);
        self.pos += end as u32;
    }
}
