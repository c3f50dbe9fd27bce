//! The `simplelang ast` command.

use simplelang_diagnostic::{RenderConfig, render_report};
use simplelang_parser::analyze;
use simplelang_syntax::printer;

use super::read_source;

/// Print the syntax tree of a file, or its diagnostics if it does not parse.
pub fn run(file: &str, json: bool) -> Result<(), String> {
    let source = read_source(file)?;
    let analysis = analyze(&source);

    let program = match &analysis.program {
        Some(program) if analysis.is_success() => program,
        _ => {
            eprint!(
                "{}",
                render_report(&analysis.reporter, &source, &RenderConfig::default())
            );
            return Err(format!("could not parse '{}'", file));
        }
    };

    if json {
        let text = serde_json::to_string_pretty(program).map_err(|e| e.to_string())?;
        println!("{}", text);
    } else {
        print!("{}", printer::dump(program));
    }
    Ok(())
}
