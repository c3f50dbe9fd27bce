//! SimpleLang CLI - lexical and syntax analysis from the command line.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::check::{CheckOptions, Format};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `simplelang_parser=trace`.
const LOG_ENV: &str = "SIMPLELANG_LOG";

/// Main CLI structure.
#[derive(Parser)]
#[command(name = "simplelang")]
#[command(author, version, about = "SimpleLang - lexical and syntax analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Check a file for lexical and syntax errors.
    Check {
        /// The file to check.
        file: String,

        /// Diagnostic style.
        #[arg(long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Do not print source lines under each error.
        #[arg(long)]
        no_context: bool,

        /// Parse even when the lexer reported errors.
        #[arg(long)]
        keep_going: bool,

        /// Print diagnostics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the token stream of a file.
    Tokens {
        /// The file to scan.
        file: String,

        /// Print tokens as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the syntax tree of a file.
    Ast {
        /// The file to parse.
        file: String,

        /// Print the tree as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive REPL.
    Repl,

    /// Print the accepted grammar.
    Grammar,
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_directive = if quiet {
        "off"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main entry point.
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Check {
            file,
            format,
            no_context,
            keep_going,
            json,
        } => {
            let options = CheckOptions {
                format,
                show_context: !no_context,
                keep_going,
                json,
            };
            commands::check::run(&file, &options, cli.verbose)
        }
        Commands::Tokens { file, json } => commands::tokens::run(&file, json),
        Commands::Ast { file, json } => commands::ast::run(&file, json),
        Commands::Repl => commands::repl::run(),
        Commands::Grammar => commands::grammar::run(),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
