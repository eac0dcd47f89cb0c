//! Character- and string-constant scanning.
//!
//! Both quoted forms share one machine, differing only in quote byte and
//! wrapping token kind. A raw carriage return, line feed, or end of input
//! before the closing quote is an "unterminated" error that aborts the
//! literal; escape decoding distinguishes "decoded a character", "decoded
//! nothing" (line continuation), and "failed, diagnostic already
//! recorded" in its result type instead of unwinding.

use rcc_diagnostic::{ErrorKind, WarningKind};
use rcc_token::TokenKind;

use crate::escape::simple_escape;
use crate::scanner::Scanner;

/// An escape sequence failed to decode; the diagnostic is already on the
/// reporter and the enclosing literal becomes an invalid token.
pub(crate) struct EscapeFailed;

/// A hex escape may spell at most two digits per byte of the target
/// character type, and `char` constants are one byte wide.
const MAX_HEX_ESCAPE_DIGITS: usize = 2;

impl Scanner<'_> {
    /// Scan a character constant with the opening `'` at the cursor.
    pub(crate) fn scan_char_constant(&mut self) -> TokenKind {
        match self.scan_quoted(b'\'', ErrorKind::UnterminatedCharacter) {
            Some(decoded) => TokenKind::CharConstant(decoded),
            None => TokenKind::Invalid,
        }
    }

    /// Scan a string constant with the opening `"` at the cursor.
    pub(crate) fn scan_string_constant(&mut self) -> TokenKind {
        match self.scan_quoted(b'"', ErrorKind::UnterminatedString) {
            Some(decoded) => TokenKind::StrConstant(decoded),
            None => TokenKind::Invalid,
        }
    }

    /// The shared quoted-constant machine.
    ///
    /// Returns the escape-decoded text, or `None` after a reported error
    /// (the caller yields an invalid token spanning what was consumed).
    fn scan_quoted(&mut self, quote: u8, unterminated: ErrorKind) -> Option<String> {
        self.cursor.advance(); // opening quote
        let mut decoded = String::new();
        loop {
            match self.cursor.current() {
                b if b == quote => {
                    self.cursor.advance();
                    return Some(decoded);
                }
                b'\r' | b'\n' => {
                    self.reporter.error(self.here(), unterminated);
                    return None;
                }
                0 if self.cursor.is_eof() => {
                    self.reporter.error(self.here(), unterminated);
                    return None;
                }
                b'\\' => match self.scan_escape() {
                    Ok(Some(c)) => decoded.push(c),
                    Ok(None) => {}
                    Err(EscapeFailed) => return None,
                },
                b if b < 0x80 => {
                    decoded.push(b as char);
                    self.cursor.advance();
                }
                _ => {
                    decoded.push(self.cursor.current_char());
                    self.cursor.advance_char();
                }
            }
        }
    }

    /// Decode one escape sequence with the backslash at the cursor.
    ///
    /// `Ok(Some(c))`: decoded to `c`. `Ok(None)`: contributed nothing
    /// (a line continuation, or end of input which the quoted loop reports
    /// as unterminated on its next iteration). `Err`: malformed, one
    /// diagnostic recorded.
    fn scan_escape(&mut self) -> Result<Option<char>, EscapeFailed> {
        self.cursor.advance(); // backslash
        match self.cursor.current() {
            b'0'..=b'7' => {
                let mut value: u32 = 0;
                let mut count = 0;
                while count < 3 && matches!(self.cursor.current(), b'0'..=b'7') {
                    value = value * 8 + u32::from(self.cursor.current() - b'0');
                    self.cursor.advance();
                    count += 1;
                }
                // At most 0o777, always a valid scalar value.
                Ok(Some(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)))
            }
            b'x' | b'X' => {
                self.cursor.advance();
                let mut value: u32 = 0;
                let mut count = 0usize;
                while self.cursor.current().is_ascii_hexdigit() {
                    if count < MAX_HEX_ESCAPE_DIGITS {
                        value = value * 16
                            + (self.cursor.current() as char).to_digit(16).unwrap_or(0);
                    }
                    self.cursor.advance();
                    count += 1;
                }
                if count == 0 {
                    self.reporter.error_with(
                        self.here(),
                        ErrorKind::InvalidEscapeSequence,
                        r"\x used with no following hex digits",
                    );
                    Err(EscapeFailed)
                } else if count > MAX_HEX_ESCAPE_DIGITS {
                    self.reporter.error_with(
                        self.here(),
                        ErrorKind::InvalidEscapeSequence,
                        "hex escape sequence out of range",
                    );
                    Err(EscapeFailed)
                } else {
                    // At most two digits, so at most 0xFF.
                    Ok(Some(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)))
                }
            }
            b'\r' | b'\n' => {
                // Line continuation: consume the newline, contribute nothing.
                self.cursor.eat_newline();
                Ok(None)
            }
            0 if self.cursor.is_eof() => Ok(None),
            b => {
                if let Some(c) = simple_escape(b) {
                    self.cursor.advance();
                    return Ok(Some(c));
                }
                let c = self.cursor.current_char();
                self.reporter.warning_with(
                    self.here(),
                    WarningKind::UnknownEscapeSequence,
                    format!("unknown escape sequence '\\{c}'"),
                );
                if b < 0x80 {
                    self.cursor.advance();
                } else {
                    self.cursor.advance_char();
                }
                Ok(Some(c))
            }
        }
    }
}
