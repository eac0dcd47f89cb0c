//! Diagnostics for the rcc front end.
//!
//! The scanner and grammar layer never abort on malformed input; every
//! problem is recorded as a [`Diagnostic`] (a [`Location`], a
//! severity-tagged kind from a closed set, and a message) on a shared
//! [`Reporter`]. The reporter is inert data after reporting: rendering,
//! exit codes, and log sinks live outside this crate (each recorded
//! diagnostic is mirrored to a `tracing` event as a side channel).
//!
//! [`Location`]: rcc_source::Location

mod diagnostic;
mod reporter;

pub use diagnostic::{Diagnostic, DiagnosticKind, ErrorKind, Severity, WarningKind};
pub use reporter::Reporter;
