//! The `simplelang repl` command.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use simplelang_diagnostic::{RenderConfig, Reporter, render_report};
use simplelang_lexer::{TokenKind, tokenize};
use simplelang_parser::analyze;
use simplelang_syntax::{Program, printer};

use super::tokens::format_tokens;

const HELP: &str = "\
Commands:
  :help, :h      Show this help
  :quit, :q      Exit the REPL
  :tokens        Show the tokens of the last input
  :ast           Show the tree of the last successful parse

Input is analysed once a line ends with ';' or '}' outside any open
block, or on an empty line.
";

/// What the REPL loop should do after a line.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Wait for more input.
    Continue,
    Print(String),
    Quit,
}

/// REPL state between lines.
#[derive(Default)]
pub struct Session {
    pending: String,
    last_source: Option<String>,
    last_program: Option<Program>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Feed one line of input.
    pub fn feed(&mut self, line: &str) -> Action {
        let trimmed = line.trim();

        if !self.is_pending() {
            if trimmed.is_empty() {
                return Action::Continue;
            }
            if trimmed.starts_with(':') {
                return self.command(trimmed);
            }
        }

        self.pending.push_str(line);
        self.pending.push('\n');

        let balanced = self.brace_depth() <= 0;
        if trimmed.is_empty() || (balanced && (trimmed.ends_with(';') || trimmed.ends_with('}'))) {
            let source = std::mem::take(&mut self.pending);
            Action::Print(self.submit(source))
        } else {
            Action::Continue
        }
    }

    /// Open minus closed brace tokens in the pending input. Braces inside
    /// strings and comments are not tokens, so they do not count.
    fn brace_depth(&self) -> i64 {
        let mut reporter = Reporter::new();
        tokenize(&self.pending, &mut reporter)
            .iter()
            .fold(0, |depth, token| match token.kind {
                TokenKind::LBrace => depth + 1,
                TokenKind::RBrace => depth - 1,
                _ => depth,
            })
    }

    fn submit(&mut self, source: String) -> String {
        let analysis = analyze(&source);
        let output = if analysis.is_success() {
            let count = analysis
                .program
                .as_ref()
                .map_or(0, |p| p.statements.len());
            format!("OK ({} statement(s))\n", count)
        } else {
            render_report(&analysis.reporter, &source, &RenderConfig::default())
        };

        if analysis.is_success() {
            self.last_program = analysis.program;
        }
        self.last_source = Some(source);
        output
    }

    fn command(&self, command: &str) -> Action {
        match command {
            ":quit" | ":q" => Action::Quit,
            ":help" | ":h" => Action::Print(HELP.to_string()),
            ":tokens" => match &self.last_source {
                Some(source) => {
                    let mut reporter = Reporter::new();
                    Action::Print(format_tokens(&tokenize(source, &mut reporter)))
                }
                None => Action::Print("No input yet.\n".to_string()),
            },
            ":ast" => match &self.last_program {
                Some(program) => Action::Print(printer::dump(program)),
                None => Action::Print("No successful parse yet.\n".to_string()),
            },
            _ => Action::Print(format!("Unknown command: {}\n", command)),
        }
    }
}

pub fn run() -> Result<(), String> {
    println!("SimpleLang REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut session = Session::new();

    loop {
        let prompt = if session.is_pending() {
            "      ... "
        } else {
            "simplelang> "
        };

        match rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match session.feed(&line) {
                    Action::Continue => {}
                    Action::Print(text) => print!("{}", text),
                    Action::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
