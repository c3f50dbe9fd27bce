//! Panic-mode recovery sets.
//!
//! After a syntax error the statement loop discards tokens until the one
//! just skipped was a `;` or the current one is a synchronization point.

use simplelang_lexer::TokenKind;

/// Keywords and braces that begin or close a statement. Recovery stops
/// in front of these without consuming them.
pub const SYNC_STARTS: &[TokenKind] = &[
    TokenKind::LBrace,
    TokenKind::RBrace,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::Int,
    TokenKind::Bool,
    TokenKind::String,
    TokenKind::Eof,
];

/// Tokens that end a statement. Recovery consumes these.
pub const STMT_ENDS: &[TokenKind] = &[TokenKind::Semicolon];

/// Check if a token kind is in a set.
pub fn is_in_set(kind: &TokenKind, set: &[TokenKind]) -> bool {
    set.iter()
        .any(|k| std::mem::discriminant(k) == std::mem::discriminant(kind))
}

/// Check if recovery should stop in front of this token.
pub fn is_sync_start(kind: &TokenKind) -> bool {
    is_in_set(kind, SYNC_STARTS)
}

/// Check if a token ends a statement.
pub fn is_stmt_end(kind: &TokenKind) -> bool {
    is_in_set(kind, STMT_ENDS)
}
