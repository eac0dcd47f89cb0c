//! Diagnostic value types.

use std::fmt;

use rcc_source::Location;

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// The closed set of error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // Lexical structure
    UnknownCharacter,
    UnterminatedBlockComment,
    UnterminatedString,
    UnterminatedCharacter,
    // Literal grammar
    InvalidIntegerSuffix,
    InvalidFloatingSuffix,
    InvalidDigit,
    InvalidFloatingExponent,
    InvalidEscapeSequence,
    // Grammar layer
    UnexpectedToken,
}

impl ErrorKind {
    /// Canonical message, used when the report site supplies none.
    pub fn canonical_message(self) -> &'static str {
        match self {
            ErrorKind::UnknownCharacter => "unknown character",
            ErrorKind::UnterminatedBlockComment => "unterminated /* comment",
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::UnterminatedCharacter => "unterminated character",
            ErrorKind::InvalidIntegerSuffix => "invalid integer constant suffix",
            ErrorKind::InvalidFloatingSuffix => "invalid floating constant suffix",
            ErrorKind::InvalidDigit => "invalid digit",
            ErrorKind::InvalidFloatingExponent => "invalid floating exponent",
            ErrorKind::InvalidEscapeSequence => "invalid escape sequence",
            ErrorKind::UnexpectedToken => "unexpected token",
        }
    }
}

/// The closed set of warning kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WarningKind {
    UnknownEscapeSequence,
}

impl WarningKind {
    /// Canonical message, used when the report site supplies none.
    pub fn canonical_message(self) -> &'static str {
        match self {
            WarningKind::UnknownEscapeSequence => "unknown escape sequence",
        }
    }
}

/// A severity-tagged diagnostic kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    Error(ErrorKind),
    Warning(WarningKind),
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::Error(_) => Severity::Error,
            DiagnosticKind::Warning(_) => Severity::Warning,
        }
    }

    pub fn canonical_message(self) -> &'static str {
        match self {
            DiagnosticKind::Error(kind) => kind.canonical_message(),
            DiagnosticKind::Warning(kind) => kind.canonical_message(),
        }
    }
}

/// A recorded error or warning tied to a source location.
///
/// Append-only: never removed, never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub location: Location,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            self.location,
            self.kind.severity(),
            self.message
        )
    }
}
