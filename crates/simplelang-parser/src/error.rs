//! Parser failure type.

use simplelang_common::{Position, Span};
use simplelang_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

/// Why a parsing routine gave up.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A malformed construct. Recovered at the nearest statement boundary.
    #[error("{0}")]
    Syntax(Box<Diagnostic>),

    /// Input nested deeper than the configured limit. Aborts the parse.
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep {
        limit: usize,
        span: Span,
        pos: Position,
    },
}

impl ParseError {
    pub fn syntax(diagnostic: Diagnostic) -> Self {
        ParseError::Syntax(Box::new(diagnostic))
    }

    /// Whether the statement loop can resynchronise after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            ParseError::Syntax(diagnostic) => *diagnostic,
            ParseError::NestingTooDeep { limit, span, pos } => Diagnostic::error(
                DiagnosticKind::Parse,
                span,
                pos,
                format!("nesting exceeds the limit of {} levels", limit),
            )
            .with_code(ErrorCode::NestingTooDeep)
            .with_label(Label::new(span, "too deep here")),
        }
    }
}

pub type PResult<T> = Result<T, ParseError>;
