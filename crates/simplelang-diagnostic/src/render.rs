//! Plain-text report rendering.
//!
//! Produces the classic `Error at line L, column C: ...` listing with a
//! small source window under each entry:
//!
//! ```text
//!    1 | int x = 5;
//!    2 | int y = ;
//!                ^
//! ```

use crate::{Diagnostic, Reporter};
use std::fmt::Write;

/// Width of the `{line:4} | ` gutter in front of each source line.
const GUTTER_WIDTH: usize = 7;

/// Plain renderer configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Print the source window under each diagnostic.
    pub show_context: bool,
    /// Stop listing errors after this many.
    pub max_errors: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_context: true,
            max_errors: None,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_context(mut self, show: bool) -> Self {
        self.show_context = show;
        self
    }

    pub fn max_errors(mut self, max: Option<usize>) -> Self {
        self.max_errors = max;
        self
    }
}

/// Format the source window for a 1-based `line`/`column`: the previous
/// line (if any), the offending line, and a `^~~~` underline `width`
/// characters wide. Returns an empty string when `line` is out of range.
pub fn format_context(source_lines: &[&str], line: u32, column: u32, width: usize) -> String {
    let line = line as usize;
    if line == 0 || line > source_lines.len() {
        return String::new();
    }

    let mut out = String::new();
    if line > 1 {
        let _ = writeln!(out, "{:4} | {}", line - 1, source_lines[line - 2]);
    }

    let text = source_lines[line - 1];
    let _ = writeln!(out, "{:4} | {}", line, text);

    let column = column.max(1) as usize;
    let remaining = text.chars().count().saturating_sub(column - 1);
    let width = width.min(remaining).max(1);
    let _ = writeln!(
        out,
        "{}^{}",
        " ".repeat(GUTTER_WIDTH + column - 1),
        "~".repeat(width - 1)
    );
    out
}

/// Render one diagnostic, with its source window when configured.
pub fn render_diagnostic(
    diagnostic: &Diagnostic,
    source_lines: &[&str],
    config: &RenderConfig,
) -> String {
    let mut out = diagnostic.to_string();
    out.push('\n');
    if config.show_context {
        let width = diagnostic.span.len().max(1);
        out.push_str(&format_context(
            source_lines,
            diagnostic.line(),
            diagnostic.column(),
            width,
        ));
    }
    out
}

/// Render every error and warning held by `reporter`.
pub fn render_report(reporter: &Reporter, source: &str, config: &RenderConfig) -> String {
    let source_lines: Vec<&str> = source.lines().collect();
    let mut out = String::new();

    if !reporter.has_errors() {
        out.push_str("No errors found.\n");
    } else {
        let _ = writeln!(out, "Found {} error(s):\n", reporter.error_count());
        let limit = config.max_errors.unwrap_or(usize::MAX);
        for (i, error) in reporter.errors().iter().take(limit).enumerate() {
            let _ = write!(
                out,
                "{}. {}",
                i + 1,
                render_diagnostic(error, &source_lines, config)
            );
            if config.show_context {
                out.push('\n');
            }
        }
        let hidden = reporter.error_count().saturating_sub(limit);
        if hidden > 0 {
            let _ = writeln!(out, "... and {} more error(s)", hidden);
        }
    }

    if reporter.warning_count() > 0 {
        let _ = writeln!(out, "\nFound {} warning(s):\n", reporter.warning_count());
        for (i, warning) in reporter.warnings().iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, warning);
        }
    }

    out
}
