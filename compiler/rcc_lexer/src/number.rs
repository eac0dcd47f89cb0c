//! Numeric-literal state machine.
//!
//! Entry is a digit (or `.` followed by a digit, which the dispatch
//! reroutes here). The base is decided first: a leading `0` followed by
//! another digit selects octal, `0x`/`0X` followed by a hex digit selects
//! hexadecimal, otherwise decimal. The main run then consumes the *widest*
//! digit alphabet (`0-9a-fA-F`) while validating lazily against the
//! selected base: the first invalid digit is reported once and
//! consumption continues, so an invalid token still spans the whole
//! malformed literal.
//!
//! `e`/`E` mid-run (non-hex) reroutes into the decimal fractional machine
//! (exponent-only floats like `10e3`); `p`/`P` after a hex run reroutes
//! into the hexadecimal fractional machine, whose binary exponent is
//! mandatory. Suffix scanning is purely lexical (`alnum` or `.`) and never
//! stops early, for the same full-span reason.

use rcc_diagnostic::ErrorKind;
use rcc_token::{Base, FloatValue, IntValue, TokenKind};

use crate::scanner::Scanner;

/// The widest digit alphabet: every byte that can appear in a digit run
/// of *some* base. Base-specific validation happens lazily on top.
#[inline]
fn is_wide_digit(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'a'..=b'f' | b'A'..=b'F')
}

/// Integer suffix grammar: at most one `u`/`U`, at most one length marker
/// that is a single `l`/`L` or two identical consecutive ones (`ll`/`LL`;
/// mixed case `lL` is invalid), in either order.
fn valid_int_suffix(suffix: &str) -> bool {
    let bytes = suffix.as_bytes();
    let mut unsigned = false;
    let mut long = false;
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        i += 1;
        match c {
            b'u' | b'U' if !unsigned => unsigned = true,
            b'l' | b'L' if !long => {
                if i < bytes.len() && bytes[i] == c {
                    i += 1;
                }
                long = true;
            }
            _ => return false,
        }
    }
    true
}

/// Floating suffix grammar: empty, `f`, `F`, `l`, or `L`.
fn valid_float_suffix(suffix: &str) -> bool {
    matches!(suffix, "" | "f" | "F" | "l" | "L")
}

/// Decimal value of one hex digit byte.
fn hex_digit(b: u8) -> u32 {
    (b as char).to_digit(16).unwrap_or(0)
}

/// Evaluate a hexadecimal floating constant: `(int + frac/16ⁿ) · 2^exp`.
///
/// # Contract
///
/// `text` is the spelled constant without its suffix: a `0x`/`0X` prefix,
/// hex digits with an optional `.`, and a well-formed `p`/`P` exponent
/// (the fractional machine rejected the constant before decoding
/// otherwise).
fn parse_hex_float(text: &str) -> f64 {
    let digits = &text[2..]; // strip 0x / 0X
    let (mantissa, exponent) = match digits.find(['p', 'P']) {
        Some(i) => (&digits[..i], &digits[i + 1..]),
        None => (digits, ""),
    };
    let (int_part, frac_part) = match mantissa.find('.') {
        Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
        None => (mantissa, ""),
    };

    let mut value = 0.0f64;
    for b in int_part.bytes() {
        value = value * 16.0 + f64::from(hex_digit(b));
    }
    let mut scale = 1.0f64 / 16.0;
    for b in frac_part.bytes() {
        value += f64::from(hex_digit(b)) * scale;
        scale /= 16.0;
    }

    let (sign, exp_digits) = match exponent.as_bytes().first() {
        Some(b'+') => (1i32, &exponent[1..]),
        Some(b'-') => (-1i32, &exponent[1..]),
        _ => (1i32, exponent),
    };
    let mut exp: i32 = 0;
    for b in exp_digits.bytes() {
        exp = exp
            .saturating_mul(10)
            .saturating_add(i32::from(b - b'0'));
    }
    value * 2.0f64.powi(sign.saturating_mul(exp))
}

impl Scanner<'_> {
    /// Scan a numeric constant starting at a digit.
    pub(crate) fn scan_number(&mut self) -> TokenKind {
        let start = self.cursor.pos();
        let mut digits_start = start;
        let mut base = Base::Decimal;

        if self.cursor.current() == b'0' {
            self.cursor.advance();
            let next = self.cursor.current();
            if is_wide_digit(next) {
                base = Base::Octal;
                digits_start = self.cursor.pos();
            } else if matches!(next, b'x' | b'X') && is_wide_digit(self.cursor.peek()) {
                self.cursor.advance();
                base = Base::Hexadecimal;
                digits_start = self.cursor.pos();
            }
        }

        let mut invalid_digit = false;
        loop {
            let c = self.cursor.current();
            if !is_wide_digit(c) {
                break;
            }
            if base != Base::Hexadecimal && matches!(c, b'e' | b'E') {
                // Exponent-only float like `10e3`.
                return self.decimal_fraction(start);
            }
            if !invalid_digit {
                let bad = match base {
                    Base::Octal => !matches!(c, b'0'..=b'7'),
                    Base::Decimal => !c.is_ascii_digit(),
                    Base::Hexadecimal => false,
                };
                if bad {
                    invalid_digit = true;
                    let name = if base == Base::Octal { "octal" } else { "decimal" };
                    self.reporter.error_with(
                        self.here(),
                        ErrorKind::InvalidDigit,
                        format!("invalid digit '{}' in {name} constant", c as char),
                    );
                }
            }
            self.cursor.advance();
        }

        if self.cursor.current() == b'.' {
            self.cursor.advance();
            return match base {
                Base::Octal | Base::Decimal => self.decimal_fraction(start),
                Base::Hexadecimal => self.hex_fraction(start),
            };
        }
        if base == Base::Hexadecimal && matches!(self.cursor.current(), b'p' | b'P') {
            return self.hex_fraction(start);
        }

        let digits_end = self.cursor.pos();
        let suffix_start = self.cursor.pos();
        self.eat_suffix_run();
        let suffix = self.cursor.slice_from(suffix_start);
        if invalid_digit {
            // Already reported; the token spans the whole malformed text.
            return TokenKind::Invalid;
        }
        if !valid_int_suffix(suffix) {
            self.reporter.error_with(
                self.here(),
                ErrorKind::InvalidIntegerSuffix,
                format!("invalid suffix '{suffix}' on integer constant"),
            );
            return TokenKind::Invalid;
        }
        let digits = self.cursor.slice(digits_start, digits_end);
        TokenKind::IntConstant(IntValue::parse(digits, base))
    }

    /// Fractional part, decimal exponent, and suffix of a decimal float.
    ///
    /// `start` is the token's first byte; entry points are a consumed `.`,
    /// an `e`/`E` still at the cursor, or a leading `.digit`.
    pub(crate) fn decimal_fraction(&mut self, start: u32) -> TokenKind {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        let mut invalid_exponent = false;
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            if !self.cursor.current().is_ascii_digit() {
                invalid_exponent = true;
                self.reporter.error_with(
                    self.here(),
                    ErrorKind::InvalidFloatingExponent,
                    "exponent has no digits",
                );
            }
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        let digits_end = self.cursor.pos();
        self.eat_suffix_run();
        let suffix = self.cursor.slice(digits_end, self.cursor.pos());
        if invalid_exponent {
            return TokenKind::Invalid;
        }
        if !valid_float_suffix(suffix) {
            self.reporter.error_with(
                self.here(),
                ErrorKind::InvalidFloatingSuffix,
                format!("invalid suffix '{suffix}' on floating constant"),
            );
            return TokenKind::Invalid;
        }
        let text = self.cursor.slice(start, digits_end);
        // The machine only produces shapes standard float parsing accepts.
        let value = text.parse::<f64>().unwrap_or_default();
        TokenKind::FloatConstant(FloatValue::new(value))
    }

    /// Fractional part, mandatory binary exponent, and suffix of a hex
    /// float.
    pub(crate) fn hex_fraction(&mut self, start: u32) -> TokenKind {
        self.cursor.eat_while(is_wide_digit);
        let mut invalid_exponent = false;
        if matches!(self.cursor.current(), b'p' | b'P') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            if !self.cursor.current().is_ascii_digit() {
                invalid_exponent = true;
                self.reporter.error_with(
                    self.here(),
                    ErrorKind::InvalidFloatingExponent,
                    "exponent has no digits",
                );
            }
            self.cursor.eat_while(|b| b.is_ascii_digit());
        } else {
            invalid_exponent = true;
            self.reporter.error_with(
                self.here(),
                ErrorKind::InvalidFloatingExponent,
                "hexadecimal floating constant requires an exponent",
            );
        }

        let digits_end = self.cursor.pos();
        self.eat_suffix_run();
        let suffix = self.cursor.slice(digits_end, self.cursor.pos());
        if invalid_exponent {
            return TokenKind::Invalid;
        }
        if !valid_float_suffix(suffix) {
            self.reporter.error_with(
                self.here(),
                ErrorKind::InvalidFloatingSuffix,
                format!("invalid suffix '{suffix}' on floating constant"),
            );
            return TokenKind::Invalid;
        }
        let text = self.cursor.slice(start, digits_end);
        TokenKind::FloatConstant(FloatValue::new(parse_hex_float(text)))
    }

    /// Consume a trailing suffix run: anything alphanumeric or `.`.
    ///
    /// Purely lexical: it never stops early even when validation will
    /// fail, so the emitted token spans the entire offending lexeme.
    fn eat_suffix_run(&mut self) {
        loop {
            let b = self.cursor.current();
            if b == b'.' || b.is_ascii_alphanumeric() {
                self.cursor.advance();
            } else if b >= 0x80 && self.cursor.current_char().is_alphanumeric() {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }
}
