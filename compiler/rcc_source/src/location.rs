//! Source locations.
//!
//! A [`Location`] pins a point in one source file: byte offset, 1-based
//! line, 0-based column (in characters). Every token carries a start and
//! an (exclusive) end location; every diagnostic carries the location it
//! was reported at.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A point in a source file.
///
/// Two locations from the same file are totally ordered by byte offset;
/// locations from different files are unordered (`partial_cmp` returns
/// `None`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// File name or path, shared with the owning `SourceFile`.
    pub file: Arc<str>,
    /// Byte offset from the start of the file.
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
    /// 0-based column, counted in characters. Resets to 0 on every
    /// logical newline.
    pub column: u32,
}

impl Location {
    /// Create a new location.
    pub fn new(file: Arc<str>, offset: u32, line: u32, column: u32) -> Self {
        Location {
            file,
            offset,
            line,
            column,
        }
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.file == other.file {
            Some(self.offset.cmp(&other.offset))
        } else {
            None
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loc(file: &str, offset: u32, line: u32, column: u32) -> Location {
        Location::new(Arc::from(file), offset, line, column)
    }

    #[test]
    fn ordered_by_offset_within_a_file() {
        let a = loc("main.c", 3, 1, 3);
        let b = loc("main.c", 10, 2, 0);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
    }

    #[test]
    fn unordered_across_files() {
        let a = loc("a.c", 3, 1, 3);
        let b = loc("b.c", 10, 2, 0);
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn display_is_file_line_column() {
        let l = loc("lib/io.c", 42, 7, 12);
        assert_eq!(l.to_string(), "lib/io.c:7:12");
    }
}
