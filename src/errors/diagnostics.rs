//! Side channel for non-fatal scan warnings and fatal parse failures.
//!
//! Both the lexer and the parser take a `&mut dyn DiagnosticSink`. The core never
//! writes to stdout or stderr itself; the sink decides where diagnostics go.

use std::fmt::Display;

use tracing::{error, warn};

use super::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The input was skipped over but processing continued.
    Warning,
    /// Processing stopped.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub error: Error,
}

impl Diagnostic {
    pub fn warning(error: Error) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            error,
        }
    }

    pub fn error(error: Error) -> Self {
        Diagnostic {
            severity: Severity::Error,
            error,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.error)
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let position = diagnostic.error.get_position();
        let name = diagnostic.error.get_error_name();
        let file = position.1.as_str();
        let offset = position.0;

        match diagnostic.severity {
            Severity::Warning => {
                warn!(error = name, file, offset, "{}", diagnostic.error.get_kind())
            }
            Severity::Error => {
                error!(error = name, file, offset, "{}", diagnostic.error.get_kind())
            }
        }
    }
}

/// Keeps every diagnostic in the order it was reported.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
