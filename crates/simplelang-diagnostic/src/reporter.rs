//! Per-run diagnostic sink.

use crate::{Diagnostic, Severity};

/// Collects the errors and warnings of one analysis run.
///
/// The lexer and parser each take `&mut Reporter`; callers decide
/// whether a phase succeeded by asking [`Reporter::has_errors`].
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, routed by its severity.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// All diagnostics, errors first, each group in report order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }
}
