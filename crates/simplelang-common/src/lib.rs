//! Common utilities and data structures for SimpleLang.
//!
//! This crate provides the source-location types shared by every phase:
//! - `Span`: byte range of a token or node in the source text
//! - `Position`: 1-based line/column used in diagnostics

mod position;
mod span;

pub use position::Position;
pub use span::Span;
