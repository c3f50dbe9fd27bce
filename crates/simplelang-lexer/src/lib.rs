//! Lexical analysis for SimpleLang.
//!
//! This crate provides the lexer that converts source code into tokens.

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use simplelang_diagnostic::Reporter;

/// Tokenize `source`, reporting lexical problems into `reporter`.
///
/// The returned sequence always ends with an `Eof` token.
pub fn tokenize(source: &str, reporter: &mut Reporter) -> Vec<Token> {
    Lexer::new(source, reporter).tokenize()
}
