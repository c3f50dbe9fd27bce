//! Diagnostic and error reporting for SimpleLang.
//!
//! Diagnostics are collected in a [`Reporter`] during analysis and can be
//! rendered either as the plain `Error at line L, column C` listing
//! ([`render_report`]) or as an ariadne report ([`emit`]).

mod codes;
mod diagnostic;
mod render;
mod reporter;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label, Severity};
pub use render::{RenderConfig, format_context, render_diagnostic, render_report};
pub use reporter::Reporter;

use ariadne::{Color, Label as AriadneLabel, Report, ReportKind, Source};

/// Render a diagnostic to stderr as an annotated source excerpt.
///
/// The code's meaning and the expected/found pair become notes; a diagnostic without labels
/// (such as an overflow warning) is underlined at its own span.
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) {
    let (kind, color) = match diagnostic.severity {
        Severity::Error => (ReportKind::Error, Color::Red),
        Severity::Warning => (ReportKind::Warning, Color::Yellow),
    };

    let mut report = Report::build(kind, filename, diagnostic.span.offset()).with_message(format!(
        "{} at {}",
        diagnostic.message, diagnostic.pos
    ));

    if let Some(code) = diagnostic.code {
        report = report.with_code(code.as_str());
    }

    if diagnostic.labels.is_empty() {
        report = report.with_label(
            AriadneLabel::new((filename, diagnostic.span.range()))
                .with_message(&diagnostic.message)
                .with_color(color),
        );
    }
    for label in &diagnostic.labels {
        report = report.with_label(
            AriadneLabel::new((filename, label.span.range()))
                .with_message(&label.message)
                .with_color(color),
        );
    }

    for note in report_notes(diagnostic) {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    let _ = report
        .finish()
        .eprint((filename, Source::from(source)));
}

/// The notes shown under an emitted report: what the code means, then the
/// expected/found pair, then any attached notes.
fn report_notes(diagnostic: &Diagnostic) -> Vec<String> {
    let mut notes = Vec::new();

    if let Some(code) = diagnostic.code {
        notes.push(format!("{}: {}", code.as_str(), code.description()));
    }
    match (&diagnostic.expected, &diagnostic.found) {
        (Some(expected), Some(found)) => {
            notes.push(format!("expected {}, found {}", expected, found));
        }
        (Some(expected), None) => notes.push(format!("expected {}", expected)),
        _ => {}
    }
    notes.extend(diagnostic.notes.iter().cloned());

    notes
}
