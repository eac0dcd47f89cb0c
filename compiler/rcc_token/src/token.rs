//! The token value produced by one `scan()` call.

use std::fmt;

use rcc_source::Location;

use crate::TokenKind;

/// One classified lexical unit.
///
/// Carries the kind (with any decoded literal value inside it), the start
/// and exclusive-end locations, and the exact spelled source text between
/// them, borrowed from the source buffer. Immutable once produced.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub start: Location,
    pub end: Location,
    /// Exact source substring from `start.offset` to `end.offset`.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Create a new token.
    pub fn new(kind: TokenKind, start: Location, end: Location, text: &'a str) -> Self {
        debug_assert_eq!(
            (end.offset - start.offset) as usize,
            text.len(),
            "spelled text must span start..end"
        );
        Token {
            kind,
            start,
            end,
            text,
        }
    }

    /// True at end of input.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {}..{}",
            self.kind, self.text, self.start.offset, self.end.offset
        )
    }
}
