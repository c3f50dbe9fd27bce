//! AST and syntax definitions for SimpleLang.
//!
//! This crate defines the abstract syntax tree produced by the parser,
//! the operator precedence table it consults, and a tree dumper for
//! debugging output.

mod ast;
mod expr;
mod grammar;
mod precedence;
pub mod printer;

pub use ast::*;
pub use expr::*;
pub use grammar::GRAMMAR;
pub use precedence::Precedence;
