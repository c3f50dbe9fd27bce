//! Parser and analysis driver for SimpleLang.
//!
//! This crate provides a recursive descent parser that converts tokens
//! into an abstract syntax tree, and the `analyze` entry points that run
//! the lexer and parser over a source string.
//!
//! ## Error Recovery
//!
//! The parser implements panic-mode recovery at every statement list
//! (program and block level), allowing multiple errors to be reported
//! in a single parse pass.

mod config;
mod error;
mod parser;
mod recovery;

pub use config::{AnalyzerConfig, DEFAULT_MAX_DEPTH};
pub use error::{PResult, ParseError};
pub use parser::Parser;
pub use recovery::{SYNC_STARTS, STMT_ENDS, is_stmt_end, is_sync_start};
pub use simplelang_lexer::tokenize;

use simplelang_diagnostic::Reporter;
use simplelang_lexer::Token;
use simplelang_syntax::Program;
use tracing::debug;

/// Parse a token stream with the default configuration.
///
/// Syntax errors go to `reporter`. The returned program may be partial
/// when errors were recovered from; `None` means parsing was aborted.
pub fn parse(tokens: Vec<Token>, reporter: &mut Reporter) -> Option<Program> {
    parse_with_config(tokens, reporter, &AnalyzerConfig::default())
}

pub fn parse_with_config(
    tokens: Vec<Token>,
    reporter: &mut Reporter,
    config: &AnalyzerConfig,
) -> Option<Program> {
    let mut parser = Parser::new(tokens, reporter).with_max_depth(config.max_depth);
    match parser.parse_program() {
        Ok(program) => Some(program),
        Err(err) => {
            debug!(error = %err, "parsing aborted");
            reporter.report(err.into_diagnostic());
            None
        }
    }
}

/// The outcome of analysing one source text.
#[derive(Debug)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    /// `None` when parsing was skipped or aborted.
    pub program: Option<Program>,
    pub reporter: Reporter,
}

impl Analysis {
    /// True when no errors were reported. Warnings are allowed.
    pub fn is_success(&self) -> bool {
        !self.reporter.has_errors() && self.program.is_some()
    }
}

/// Lex and parse `source` with the default configuration.
pub fn analyze(source: &str) -> Analysis {
    analyze_with_config(source, &AnalyzerConfig::default())
}

pub fn analyze_with_config(source: &str, config: &AnalyzerConfig) -> Analysis {
    let mut reporter = Reporter::new();
    let tokens = tokenize(source, &mut reporter);

    if reporter.has_errors() && !config.continue_after_lexical_errors {
        debug!(
            errors = reporter.error_count(),
            "lexical errors, skipping syntax analysis"
        );
        return Analysis {
            tokens,
            program: None,
            reporter,
        };
    }

    let program = parse_with_config(tokens.clone(), &mut reporter, config);
    Analysis {
        tokens,
        program,
        reporter,
    }
}
