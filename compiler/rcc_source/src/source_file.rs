//! Sentinel-terminated source file for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! letting the scanner detect end of input without explicit bounds checks.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also provides safe padding for `peek()`/`peek2()` near the end.

use std::fmt;
use std::sync::Arc;

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Error when constructing a [`SourceFile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Source text exceeds `u32::MAX` bytes; offsets would not fit a `u32`.
    TooLarge(usize),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::TooLarge(len) => write!(
                f,
                "source file is {len} bytes, larger than the {} byte maximum",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for SourceError {}

/// An immutable, sentinel-terminated source file.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`. All subsequent bytes
/// (padding) are also `0x00`, ensuring safe `peek()`/`peek2()` reads near
/// the end of the buffer.
///
/// Created once at load time, never mutated. The file name is shared
/// (`Arc<str>`) so every [`Location`](crate::Location) can carry file
/// identity without copying the string.
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Shared file name or path.
    name: Arc<str>,
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceFile {
    /// Create a new sentinel-terminated source file.
    ///
    /// Copies the source bytes into a padded buffer with a `0x00` sentinel
    /// appended. Fails with [`SourceError::TooLarge`] if the source exceeds
    /// `u32::MAX` bytes, since all offsets in the front end are `u32`.
    pub fn new(name: impl Into<Arc<str>>, source: &str) -> Result<Self, SourceError> {
        let source_bytes = source.as_bytes();
        let source_len =
            u32::try_from(source_bytes.len()).map_err(|_| SourceError::TooLarge(source.len()))?;

        // Round up to the next 64-byte boundary (minimum: source + sentinel).
        let padded_len = (source_bytes.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled, then copy the source. The sentinel at
        // buf[source_len] and the padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_bytes.len()].copy_from_slice(source_bytes);

        Ok(Self {
            name: name.into(),
            buf,
            source_len,
        })
    }

    /// The file name or path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file name as a shared handle, for embedding in
    /// [`Location`](crate::Location) values.
    pub fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// The source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The source text.
    #[allow(
        unsafe_code,
        reason = "buffer was constructed from &str and is never mutated"
    )]
    pub fn text(&self) -> &str {
        // SAFETY: `buf[..source_len]` is a byte-for-byte copy of the `&str`
        // the file was constructed from, and the buffer is never mutated.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Create a [`Cursor`] positioned at byte 0, line 1, column 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

#[cfg(test)]
mod tests;
