//! Per-compilation diagnostic accumulator.

use std::cell::{Ref, RefCell};

use rcc_source::Location;
use tracing::{error, warn};

use crate::{Diagnostic, DiagnosticKind, ErrorKind, WarningKind};

/// Ordered accumulator of errors and warnings for one compilation unit.
///
/// Reporting never fails and never aborts: every call appends a
/// [`Diagnostic`] and returns. A default message is derived from the
/// kind's canonical text when none is supplied. Each report is also
/// mirrored to a `tracing` event; installing a subscriber (or not) is the
/// caller's business.
///
/// The reporter is shared by reference between the scanner and any later
/// phase reporting against the same location space, so the sequences live
/// behind `RefCell`s. It is single-threaded by design (not `Sync`); a
/// compilation pipeline owns exactly one and resets by constructing a new
/// instance.
#[derive(Debug, Default)]
pub struct Reporter {
    errors: RefCell<Vec<Diagnostic>>,
    warnings: RefCell<Vec<Diagnostic>>,
}

impl Reporter {
    /// Create an empty reporter.
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Record an error with its canonical message.
    pub fn error(&self, location: Location, kind: ErrorKind) {
        self.push_error(location, kind, kind.canonical_message().to_string());
    }

    /// Record an error with a message specific to this occurrence.
    pub fn error_with(&self, location: Location, kind: ErrorKind, message: impl Into<String>) {
        self.push_error(location, kind, message.into());
    }

    /// Record a warning with its canonical message.
    pub fn warning(&self, location: Location, kind: WarningKind) {
        self.push_warning(location, kind, kind.canonical_message().to_string());
    }

    /// Record a warning with a message specific to this occurrence.
    pub fn warning_with(&self, location: Location, kind: WarningKind, message: impl Into<String>) {
        self.push_warning(location, kind, message.into());
    }

    fn push_error(&self, location: Location, kind: ErrorKind, message: String) {
        error!(%location, ?kind, "{message}");
        self.errors.borrow_mut().push(Diagnostic {
            location,
            kind: DiagnosticKind::Error(kind),
            message,
        });
    }

    fn push_warning(&self, location: Location, kind: WarningKind, message: String) {
        warn!(%location, ?kind, "{message}");
        self.warnings.borrow_mut().push(Diagnostic {
            location,
            kind: DiagnosticKind::Warning(kind),
            message,
        });
    }

    /// The recorded errors, in report order.
    pub fn errors(&self) -> Ref<'_, Vec<Diagnostic>> {
        self.errors.borrow()
    }

    /// The recorded warnings, in report order.
    pub fn warnings(&self) -> Ref<'_, Vec<Diagnostic>> {
        self.warnings.borrow()
    }

    /// Number of recorded errors.
    pub fn error_count(&self) -> usize {
        self.errors.borrow().len()
    }

    /// Number of recorded warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.borrow().len()
    }

    /// True if any error has been recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn loc(offset: u32) -> Location {
        Location::new(Arc::from("test.c"), offset, 1, offset)
    }

    #[test]
    fn appends_in_order_with_canonical_messages() {
        let reporter = Reporter::new();
        reporter.error(loc(0), ErrorKind::UnknownCharacter);
        reporter.error(loc(3), ErrorKind::InvalidDigit);
        reporter.warning(loc(5), WarningKind::UnknownEscapeSequence);

        assert_eq!(reporter.error_count(), 2);
        assert_eq!(reporter.warning_count(), 1);
        let errors = reporter.errors();
        assert_eq!(errors[0].message, "unknown character");
        assert_eq!(errors[0].location.offset, 0);
        assert_eq!(errors[1].message, "invalid digit");
        assert_eq!(
            reporter.warnings()[0].kind,
            DiagnosticKind::Warning(WarningKind::UnknownEscapeSequence)
        );
    }

    #[test]
    fn message_override_keeps_kind() {
        let reporter = Reporter::new();
        reporter.error_with(
            loc(2),
            ErrorKind::InvalidDigit,
            "invalid digit '8' in octal constant",
        );
        let errors = reporter.errors();
        assert_eq!(errors[0].kind, DiagnosticKind::Error(ErrorKind::InvalidDigit));
        assert_eq!(errors[0].message, "invalid digit '8' in octal constant");
    }

    #[test]
    fn shared_by_reference() {
        let reporter = Reporter::new();
        let a = &reporter;
        let b = &reporter;
        a.error(loc(0), ErrorKind::UnknownCharacter);
        b.error(loc(1), ErrorKind::UnknownCharacter);
        assert!(reporter.has_errors());
        assert_eq!(reporter.error_count(), 2);
    }
}
