//! Operator-facing warnings raised while encoding.
//!
//! Diagnostics go to a sink passed into every encode call, never into the
//! encoded output.

use std::fmt;

/// Non-fatal event raised during encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// Character with no entry in the table; it was left out of the output.
    UnrecognizedCharacter(char),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedCharacter(c) => write!(f, "Warning: skipping: {}", c),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that writes each diagnostic to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(?diagnostic, "diagnostic reported");
        eprintln!("{}", diagnostic);
    }
}
