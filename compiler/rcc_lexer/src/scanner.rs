//! The scanner's main dispatch.
//!
//! Each `scan()` call skips leading whitespace (folding `\r\n`/`\r`/`\n`
//! into logical newlines that reset the column), records the start
//! location, dispatches on the next byte to a focused method that consumes
//! exactly one token, and records the exclusive end location. Numeric and
//! quoted-constant scanning live in the sibling `number` and `quoted`
//! modules; everything else is here.

use rcc_diagnostic::{ErrorKind, Reporter};
use rcc_source::{Cursor, Location, SourceFile};
use rcc_token::{keyword_lookup, Token, TokenKind};

/// The lexical state machine over one source file.
///
/// Owns a cursor into the file's sentinel-terminated buffer and shares the
/// per-compilation [`Reporter`]. Produces exactly one token per
/// [`scan()`](Scanner::scan) call; once the source is exhausted every
/// further call returns an EOF token at the same location.
pub struct Scanner<'a> {
    pub(crate) file: &'a SourceFile,
    pub(crate) reporter: &'a Reporter,
    pub(crate) cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `file`.
    pub fn new(file: &'a SourceFile, reporter: &'a Reporter) -> Self {
        Scanner {
            file,
            reporter,
            cursor: file.cursor(),
        }
    }

    /// The location of the current cursor position.
    pub(crate) fn here(&self) -> Location {
        Location::new(
            self.file.shared_name(),
            self.cursor.pos(),
            self.cursor.line(),
            self.cursor.column(),
        )
    }

    /// Produce the next token.
    ///
    /// Skips a maximal run of leading whitespace, then consumes exactly one
    /// token. The token's spelled text is the exact source substring
    /// between its start and (exclusive) end offsets. At end of input this
    /// returns an EOF token with empty text, repeatably.
    pub fn scan(&mut self) -> Token<'a> {
        self.skip_whitespace();
        let start = self.here();
        let kind = self.dispatch();
        let end = self.here();
        let text = self.cursor.slice(start.offset, end.offset);
        Token::new(kind, start, end, text)
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | 0x0B | 0x0C => self.cursor.advance(),
                b'\r' | b'\n' => self.cursor.eat_newline(),
                _ => break,
            }
        }
    }

    fn dispatch(&mut self) -> TokenKind {
        match self.cursor.current() {
            0 => self.eof_or_unknown(),
            b'0'..=b'9' => self.scan_number(),
            b'\'' => self.scan_char_constant(),
            b'"' => self.scan_string_constant(),
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => self.ident_or_keyword(),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'[' => self.single(TokenKind::LBracket),
            b']' => self.single(TokenKind::RBracket),
            b'.' => self.dot(),
            b';' => self.single(TokenKind::Semicolon),
            b',' => self.single(TokenKind::Comma),
            b'<' => self.less(),
            b'>' => self.greater(),
            b'=' => self.equal(),
            b'!' => self.bang(),
            b'+' => self.plus(),
            b'-' => self.minus(),
            b'*' => self.star(),
            b'/' => self.slash_or_comment(),
            b'%' => self.percent(),
            b'&' => self.ampersand(),
            b'|' => self.pipe(),
            b'^' => self.caret(),
            b'~' => self.single(TokenKind::Tilde),
            b'?' => self.single(TokenKind::Question),
            b':' => self.colon(),
            b'#' => self.hash(),
            _ => self.non_ascii_or_unknown(),
        }
    }

    // ─── EOF / unknown ───────────────────────────────────────────────────

    fn eof_or_unknown(&mut self) -> TokenKind {
        if self.cursor.is_eof() {
            return TokenKind::Eof;
        }
        // Interior null byte.
        self.reporter.error(self.here(), ErrorKind::UnknownCharacter);
        self.cursor.advance();
        TokenKind::Invalid
    }

    /// Non-ASCII letters scan as identifier characters; everything else
    /// (control bytes, stray symbols, non-letter code points) is an
    /// unknown character.
    fn non_ascii_or_unknown(&mut self) -> TokenKind {
        if self.cursor.current() >= 0x80 && self.cursor.current_char().is_alphabetic() {
            let start = self.cursor.pos();
            self.cursor.advance_char();
            return self.ident_tail(start);
        }
        self.reporter.error(self.here(), ErrorKind::UnknownCharacter);
        self.cursor.advance_char();
        TokenKind::Invalid
    }

    // ─── Identifiers & keywords ──────────────────────────────────────────

    fn ident_or_keyword(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        self.cursor.advance();
        self.ident_tail(start)
    }

    fn ident_tail(&mut self, start: u32) -> TokenKind {
        self.eat_ident_continue();
        match keyword_lookup(self.cursor.slice_from(start)) {
            Some(keyword) => keyword,
            None => TokenKind::Ident,
        }
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if b == b'_' || b.is_ascii_alphanumeric() {
                self.cursor.advance();
            } else if b >= 0x80 && self.cursor.current_char().is_alphanumeric() {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    // ─── Comments ────────────────────────────────────────────────────────

    fn slash_or_comment(&mut self) -> TokenKind {
        self.cursor.advance(); // '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.advance();
                // The newline is left for the next whitespace skip.
                self.cursor.eat_to_line_end();
                TokenKind::LineComment
            }
            b'*' => {
                self.cursor.advance();
                self.block_comment()
            }
            b'=' => {
                self.cursor.advance();
                TokenKind::SlashEq
            }
            _ => TokenKind::Slash,
        }
    }

    fn block_comment(&mut self) -> TokenKind {
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => {
                    self.reporter
                        .error(self.here(), ErrorKind::UnterminatedBlockComment);
                    return TokenKind::Invalid;
                }
                b'*' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'/' {
                        self.cursor.advance();
                        return TokenKind::BlockComment;
                    }
                }
                b'\r' | b'\n' => self.cursor.eat_newline(),
                b if b < 0x80 => self.cursor.advance(),
                _ => self.cursor.advance_char(),
            }
        }
    }

    // ─── Punctuators & digraphs ──────────────────────────────────────────

    /// Single-byte punctuator: advance one byte and emit the given kind.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn dot(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        self.cursor.advance(); // '.'
        if self.cursor.current().is_ascii_digit() {
            // `.5` is a fractional constant, not a dot.
            return self.decimal_fraction(start);
        }
        if self.cursor.current() == b'.' && self.cursor.peek() == b'.' {
            self.cursor.advance();
            self.cursor.advance();
            return TokenKind::Ellipsis;
        }
        TokenKind::Dot
    }

    fn less(&mut self) -> TokenKind {
        self.cursor.advance(); // '<'
        match self.cursor.current() {
            b'=' => self.single(TokenKind::LtEq),
            b'<' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.single(TokenKind::ShlEq)
                } else {
                    TokenKind::Shl
                }
            }
            // Digraphs: `<:` is `[`, `<%` is `{`.
            b':' => self.single(TokenKind::LBracket),
            b'%' => self.single(TokenKind::LBrace),
            _ => TokenKind::Lt,
        }
    }

    fn greater(&mut self) -> TokenKind {
        self.cursor.advance(); // '>'
        match self.cursor.current() {
            b'=' => self.single(TokenKind::GtEq),
            b'>' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.single(TokenKind::ShrEq)
                } else {
                    TokenKind::Shr
                }
            }
            _ => TokenKind::Gt,
        }
    }

    fn equal(&mut self) -> TokenKind {
        self.cursor.advance(); // '='
        if self.cursor.current() == b'=' {
            self.single(TokenKind::EqEq)
        } else {
            TokenKind::Eq
        }
    }

    fn bang(&mut self) -> TokenKind {
        self.cursor.advance(); // '!'
        if self.cursor.current() == b'=' {
            self.single(TokenKind::BangEq)
        } else {
            TokenKind::Bang
        }
    }

    fn plus(&mut self) -> TokenKind {
        self.cursor.advance(); // '+'
        match self.cursor.current() {
            b'+' => self.single(TokenKind::PlusPlus),
            b'=' => self.single(TokenKind::PlusEq),
            _ => TokenKind::Plus,
        }
    }

    fn minus(&mut self) -> TokenKind {
        self.cursor.advance(); // '-'
        match self.cursor.current() {
            b'-' => self.single(TokenKind::MinusMinus),
            b'=' => self.single(TokenKind::MinusEq),
            b'>' => self.single(TokenKind::Arrow),
            _ => TokenKind::Minus,
        }
    }

    fn star(&mut self) -> TokenKind {
        self.cursor.advance(); // '*'
        if self.cursor.current() == b'=' {
            self.single(TokenKind::StarEq)
        } else {
            TokenKind::Star
        }
    }

    fn percent(&mut self) -> TokenKind {
        self.cursor.advance(); // '%'
        match self.cursor.current() {
            b'=' => self.single(TokenKind::PercentEq),
            // Digraphs: `%>` is `}`, `%:` is `#`, `%:%:` is `##`.
            b'>' => self.single(TokenKind::RBrace),
            b':' => {
                self.cursor.advance();
                if self.cursor.current() == b'%' && self.cursor.peek() == b':' {
                    self.cursor.advance();
                    self.cursor.advance();
                    TokenKind::HashHash
                } else {
                    TokenKind::Hash
                }
            }
            _ => TokenKind::Percent,
        }
    }

    fn ampersand(&mut self) -> TokenKind {
        self.cursor.advance(); // '&'
        match self.cursor.current() {
            b'&' => self.single(TokenKind::AmpAmp),
            b'=' => self.single(TokenKind::AmpEq),
            _ => TokenKind::Amp,
        }
    }

    fn pipe(&mut self) -> TokenKind {
        self.cursor.advance(); // '|'
        match self.cursor.current() {
            b'|' => self.single(TokenKind::PipePipe),
            b'=' => self.single(TokenKind::PipeEq),
            _ => TokenKind::Pipe,
        }
    }

    fn caret(&mut self) -> TokenKind {
        self.cursor.advance(); // '^'
        if self.cursor.current() == b'=' {
            self.single(TokenKind::CaretEq)
        } else {
            TokenKind::Caret
        }
    }

    fn colon(&mut self) -> TokenKind {
        self.cursor.advance(); // ':'
        if self.cursor.current() == b'>' {
            // Digraph: `:>` is `]`.
            self.single(TokenKind::RBracket)
        } else {
            TokenKind::Colon
        }
    }

    fn hash(&mut self) -> TokenKind {
        self.cursor.advance(); // '#'
        if self.cursor.current() == b'#' {
            self.single(TokenKind::HashHash)
        } else {
            TokenKind::Hash
        }
    }
}

#[cfg(test)]
mod tests;
