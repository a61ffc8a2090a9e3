//! Collects diagnostics from the pipeline stages of one compilation run.

use super::record::Diagnostic;

/// Ordered, append-only store of diagnostics plus a one-way fatal latch.
///
/// One collector exists per compilation run. Stages borrow it `&mut`
/// strictly one after another and record what they find without stopping;
/// the report renderer later reads the sequence in insertion order. The
/// latch is advisory: the driver checks it between stages, nothing in this
/// module acts on it.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    fatal: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Never fails, never deduplicates, never latches.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// All records so far, in the order they were reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Latches the fatal flag. Idempotent; there is no way back within one
    /// collector lifetime.
    pub fn mark_fatal(&mut self) {
        self.fatal = true;
    }

    pub fn has_fatal_error(&self) -> bool {
        self.fatal
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
