//! Source buffers and locations for the rcc front end.
//!
//! A [`SourceFile`] owns the complete text of one translation unit in a
//! sentinel-terminated buffer. A [`Cursor`] walks that buffer byte-by-byte
//! while tracking line and column, and a [`Location`] is the value attached
//! to every token and diagnostic: file identity, byte offset, 1-based line,
//! 0-based column.
//!
//! This crate is standalone so external tools (formatters, highlighters)
//! can depend on it without pulling in the rest of the front end.

mod cursor;
mod location;
mod source_file;

pub use cursor::Cursor;
pub use location::Location;
pub use source_file::{SourceError, SourceFile};
