//! Diagnostic types and builders.

use crate::ErrorCode;
use serde::{Serialize, Serializer};
use simplelang_common::{Position, Span};
use std::fmt;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Which phase raised the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// Bad character or unterminated string; always recovered locally.
    Lexical,
    /// Token mismatch or malformed construct; recovered at a statement boundary.
    Syntax,
    /// Internal parser failure that aborted the parse.
    Parse,
}

/// A labeled span within a diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// A diagnostic message with its source location and optional
/// expected/found descriptions, labels, notes, and help.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    #[serde(serialize_with = "serialize_code")]
    pub code: Option<ErrorCode>,
    pub message: String,
    pub span: Span,
    pub pos: Position,
    pub expected: Option<String>,
    pub found: Option<String>,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, span: Span, pos: Position, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, kind, span, pos, message.into())
    }

    pub fn warning(
        kind: DiagnosticKind,
        span: Span,
        pos: Position,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, kind, span, pos, message.into())
    }

    fn new(
        severity: Severity,
        kind: DiagnosticKind,
        span: Span,
        pos: Position,
        message: String,
    ) -> Self {
        Self {
            severity,
            kind,
            code: None,
            message,
            span,
            pos,
            expected: None,
            found: None,
            labels: vec![],
            notes: vec![],
            help: None,
        }
    }

    /// Attach an error code. The code's suggestion becomes the help text
    /// unless help was already given.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        if self.help.is_none() {
            self.help = code.suggestion().map(str::to_string);
        }
        self
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn line(&self) -> u32 {
        self.pos.line
    }

    pub fn column(&self) -> u32 {
        self.pos.column
    }

    /// The message with the expected/found pair appended.
    pub fn text(&self) -> String {
        match (&self.expected, &self.found) {
            (Some(expected), Some(found)) => {
                format!("{} (expected {}, found {})", self.message, expected, found)
            }
            (Some(expected), None) => format!("{} (expected {})", self.message, expected),
            (None, Some(found)) => format!("{} (found {})", self.message, found),
            (None, None) => self.message.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(
            f,
            "{} at line {}, column {}: {}",
            prefix,
            self.pos.line,
            self.pos.column,
            self.text()
        )
    }
}

fn serialize_code<S: Serializer>(code: &Option<ErrorCode>, s: S) -> Result<S::Ok, S::Error> {
    match code {
        Some(code) => s.serialize_some(code.as_str()),
        None => s.serialize_none(),
    }
}
