//! Analyzer configuration.

/// Default bound on statement and expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Analyzer configuration.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Run the parser even when the lexer reported errors.
    pub continue_after_lexical_errors: bool,
    /// Maximum nesting of blocks, parentheses and unary operators.
    pub max_depth: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            continue_after_lexical_errors: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn continue_after_lexical_errors(mut self, yes: bool) -> Self {
        self.continue_after_lexical_errors = yes;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
