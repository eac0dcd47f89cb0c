//! Buffered, speculative token cursor.
//!
//! Wraps a [`Scanner`] with an append-only token buffer supporting
//! unbounded lookahead, position marking, backtracking to a mark, and
//! explicit seeking. Speculation never re-scans the source, only
//! re-reads buffered tokens, so decoded values and locations are stable
//! and diagnostics are never duplicated on backtrack.
//!
//! Comment tokens are filtered at fill time; the grammar layer never
//! sees them.

use rcc_lexer::Scanner;
use rcc_token::Token;
use smallvec::SmallVec;
use tracing::trace;

/// Buffered token cursor over a scanner.
///
/// # Invariants
///
/// - The read position never exceeds the buffered length.
/// - Tokens at or after the lowest active marker are never discarded;
///   compaction only runs with no speculation in flight.
pub struct TokenStream<'a> {
    scanner: Scanner<'a>,
    /// Previously scanned tokens not yet permanently consumed.
    buf: Vec<Token<'a>>,
    /// Current read position into `buf`.
    pos: usize,
    /// Saved positions of nested speculative attempts.
    markers: SmallVec<[usize; 8]>,
}

impl<'a> TokenStream<'a> {
    /// Create a stream over `scanner`.
    pub fn new(scanner: Scanner<'a>) -> Self {
        TokenStream {
            scanner,
            buf: Vec::new(),
            pos: 0,
            markers: SmallVec::new(),
        }
    }

    /// The token `k` positions ahead of the read position (`k >= 1`),
    /// without consuming it.
    ///
    /// Transparently pulls more tokens from the scanner when the buffer
    /// does not yet extend that far. Once the source is exhausted the
    /// scanner keeps yielding EOF, so every distance is valid.
    pub fn peek(&mut self, k: usize) -> &Token<'a> {
        debug_assert!(k >= 1, "peek distance is 1-based");
        self.sync(k);
        &self.buf[self.pos + k - 1]
    }

    /// Move the read position forward by one token.
    ///
    /// When no speculation is active and the buffered prefix is fully
    /// consumed, the buffer is compacted: consumed tokens are dropped and
    /// the position rebased to zero. Housekeeping, not correctness: it
    /// bounds memory on long non-backtracking parses.
    pub fn advance(&mut self) {
        trace!(pos = self.pos, "advance");
        self.pos += 1;
        if self.pos == self.buf.len() && !self.is_speculating() {
            self.pos = 0;
            self.buf.clear();
        }
        self.sync(1);
    }

    /// Push the current read position as a checkpoint for a speculative
    /// attempt and return it.
    pub fn mark(&mut self) -> usize {
        self.markers.push(self.pos);
        self.pos
    }

    /// Pop the most recent checkpoint and rewind the read position to it,
    /// discarding any forward progress made since.
    ///
    /// # Panics
    ///
    /// Panics if called without a matching [`mark()`](Self::mark), a
    /// caller contract violation rather than a recoverable state.
    pub fn release(&mut self) {
        let Some(marker) = self.markers.pop() else {
            panic!("release() without a matching mark()");
        };
        self.seek(marker);
    }

    /// Set the read position to a previously observed value.
    ///
    /// Commits to or abandons a speculative path without going through
    /// the marker stack.
    pub fn seek(&mut self, index: usize) {
        debug_assert!(index <= self.buf.len(), "seek index out of buffered range");
        self.pos = index;
    }

    /// True while a speculative attempt is in flight (non-empty marker
    /// stack). Gates compaction: a pending backtrack may still need the
    /// buffered tokens.
    pub fn is_speculating(&self) -> bool {
        !self.markers.is_empty()
    }

    /// Number of tokens currently buffered.
    pub fn buffered_len(&self) -> usize {
        self.buf.len()
    }

    /// Ensure a token exists `k` ahead of the read position.
    fn sync(&mut self, k: usize) {
        let needed = self.pos + k;
        while self.buf.len() < needed {
            let tok = self.next_significant();
            self.buf.push(tok);
        }
    }

    /// Scan the next non-comment token.
    fn next_significant(&mut self) -> Token<'a> {
        loop {
            let tok = self.scanner.scan();
            if !tok.kind.is_comment() {
                return tok;
            }
        }
    }
}
