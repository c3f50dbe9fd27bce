//! The `simplelang grammar` command.

use simplelang_syntax::GRAMMAR;

pub fn run() -> Result<(), String> {
    println!("{}", GRAMMAR.trim_end());
    Ok(())
}
