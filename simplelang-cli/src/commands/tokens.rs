//! The `simplelang tokens` command.

use simplelang_diagnostic::{RenderConfig, Reporter, render_report};
use simplelang_lexer::{Token, TokenKind, tokenize};
use std::fmt::Write;

use super::read_source;

/// Print the token stream of a file.
pub fn run(file: &str, json: bool) -> Result<(), String> {
    let source = read_source(file)?;
    let mut reporter = Reporter::new();
    let tokens = tokenize(&source, &mut reporter);

    if json {
        let visible: Vec<&Token> = tokens.iter().filter(|t| t.kind != TokenKind::Eof).collect();
        let text = serde_json::to_string_pretty(&visible).map_err(|e| e.to_string())?;
        println!("{}", text);
    } else {
        print!("{}", format_tokens(&tokens));
    }

    if reporter.has_errors() {
        eprint!("{}", render_report(&reporter, &source, &RenderConfig::default()));
        return Err("lexical errors found".to_string());
    }
    Ok(())
}

/// One line per token: index, kind name, lexeme and position. The
/// trailing `EOF` is omitted.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (index, token) in tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .enumerate()
    {
        let _ = writeln!(
            out,
            "{:4}  {:<14} {:<16} {}",
            index,
            token.kind.name(),
            token.lexeme,
            token.pos
        );
    }
    out
}
