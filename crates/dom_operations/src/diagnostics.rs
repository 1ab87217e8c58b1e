//! Non-fatal diagnostics raised while applying properties.
//!
//! Diagnostics never change control flow; they are handed to a
//! [`DiagnosticSink`], which by default forwards them to the `log` crate.

use core::fmt::{Display, Formatter, Result as FmtResult};

use log::warn;

/// A developer-facing warning about a property write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A raw attribute name failed the attribute-name grammar.
    InvalidAttributeName { name: String },
    /// An unknown property whose lowercased form matches a known one.
    UnknownProperty { name: String, suggestion: String },
}

impl Display for Diagnostic {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidAttributeName { name } => write!(formatter, "Invalid attribute name: `{name}`"),
            Self::UnknownProperty { name, suggestion } => {
                write!(formatter, "Unknown DOM property {name}. Did you mean {suggestion}?")
            }
        }
    }
}

/// Receiver of diagnostics. Must not panic.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// A `DiagnosticSink` that routes to `log::warn!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    #[inline]
    fn report(&self, diagnostic: &Diagnostic) {
        warn!("[DOM]: {diagnostic}");
    }
}
