//! The `simplelang check` command.

use crate::output;
use clap::ValueEnum;
use simplelang_diagnostic::{RenderConfig, emit, render_report};
use simplelang_parser::{Analysis, AnalyzerConfig, analyze_with_config};
use tracing::debug;

use super::read_source;

/// How diagnostics are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Numbered report with a source window under each error
    #[default]
    Plain,
    /// Annotated reports on stderr
    Pretty,
}

/// Options for a `check` run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub format: Format,
    pub show_context: bool,
    pub keep_going: bool,
    pub json: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            format: Format::Plain,
            show_context: true,
            keep_going: false,
            json: false,
        }
    }
}

impl CheckOptions {
    fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new().continue_after_lexical_errors(self.keep_going)
    }
}

/// Run lexical and syntax analysis on a SimpleLang file.
pub fn run(file: &str, options: &CheckOptions, verbose: bool) -> Result<(), String> {
    let source = read_source(file)?;
    debug!(file, bytes = source.len(), "checking");
    let analysis = analyze_with_config(&source, &options.analyzer_config());

    if verbose {
        output::info(&format!("Scanned {} tokens", analysis.tokens.len()));
        if let Some(program) = &analysis.program {
            output::info(&format!(
                "Parsed {} top-level statements",
                program.statements.len()
            ));
        }
    }

    if options.json {
        println!("{}", to_json(file, &analysis)?);
    } else {
        match options.format {
            Format::Plain => {
                let config = RenderConfig::new().show_context(options.show_context);
                print!("{}", render_report(&analysis.reporter, &source, &config));
            }
            Format::Pretty => {
                for diag in analysis.reporter.diagnostics() {
                    emit(&source, file, diag);
                }
                let warnings = analysis.reporter.warning_count();
                if warnings > 0 {
                    output::warning(&format!("{} warning(s) found", warnings));
                }
                if analysis.is_success() {
                    output::success("OK - No errors found");
                } else {
                    output::error(&format!(
                        "{} error(s) found",
                        analysis.reporter.error_count()
                    ));
                }
            }
        }
    }

    if analysis.is_success() {
        Ok(())
    } else {
        Err(format!("could not analyze '{}'", file))
    }
}

/// Serialize the outcome of an analysis.
pub fn to_json(file: &str, analysis: &Analysis) -> Result<String, String> {
    let value = serde_json::json!({
        "file": file,
        "success": analysis.is_success(),
        "errors": analysis.reporter.errors(),
        "warnings": analysis.reporter.warnings(),
    });
    serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
}
