//! Token definitions for SimpleLang.

use serde::Serialize;
use simplelang_common::{Position, Span};

/// A token with its kind, raw text and location.
///
/// `pos` is the line/column of the token's first character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span, pos: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            pos,
        }
    }

    pub fn line(&self) -> u32 {
        self.pos.line
    }

    pub fn column(&self) -> u32 {
        self.pos.column
    }

    /// Describe the token for a "found ..." message.
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Identifier(name) => format!("identifier '{}'", name),
            TokenKind::Integer(_) => format!("integer literal '{}'", self.lexeme),
            TokenKind::StringLiteral(_) => format!("string literal {}", self.lexeme),
            kind if kind.is_keyword() => format!("keyword '{}'", self.lexeme),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    // Literals
    Integer(i64),
    StringLiteral(String),
    Identifier(String),

    // Type keywords
    Int,
    Bool,
    String,

    // Keywords
    If,
    Else,
    For,
    While,
    True,
    False,
    Print, // dikhao
    Input, // likho

    // Operators
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Assign,  // =
    Lt,      // <
    Gt,      // >
    LtEq,    // <=
    GtEq,    // >=
    EqEq,    // ==
    BangEq,  // !=
    AndAnd,  // &&
    OrOr,    // ||
    Bang,    // !

    // Punctuation
    Semicolon, // ;
    LBrace,    // {
    RBrace,    // }
    LParen,    // (
    RParen,    // )
    Comma,     // ,

    // Special
    Eof,
}

impl TokenKind {
    /// The stable upper-case name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Integer(_) => "INTEGER",
            TokenKind::StringLiteral(_) => "STRING_LITERAL",
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::Int => "INT",
            TokenKind::Bool => "BOOL",
            TokenKind::String => "STRING",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Print => "PRINT",
            TokenKind::Input => "INPUT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Percent => "MODULO",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Lt => "LESS_THAN",
            TokenKind::Gt => "GREATER_THAN",
            TokenKind::LtEq => "LESS_EQUAL",
            TokenKind::GtEq => "GREATER_EQUAL",
            TokenKind::EqEq => "EQUAL",
            TokenKind::BangEq => "NOT_EQUAL",
            TokenKind::AndAnd => "AND",
            TokenKind::OrOr => "OR",
            TokenKind::Bang => "NOT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LBrace => "LEFT_BRACE",
            TokenKind::RBrace => "RIGHT_BRACE",
            TokenKind::LParen => "LEFT_PAREN",
            TokenKind::RParen => "RIGHT_PAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
        }
    }

    /// The fixed source text of keywords, operators and punctuation.
    pub fn text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Integer(_) | TokenKind::StringLiteral(_) | TokenKind::Identifier(_) => {
                return None;
            }
            TokenKind::Eof => return None,
            TokenKind::Int => "int",
            TokenKind::Bool => "bool",
            TokenKind::String => "string",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Print => "dikhao",
            TokenKind::Input => "likho",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Assign => "=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::EqEq => "==",
            TokenKind::BangEq => "!=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Bang => "!",
            TokenKind::Semicolon => ";",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
        };
        Some(text)
    }

    /// Describe the kind for an "expected ..." message.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Integer(_) => "integer literal".to_string(),
            TokenKind::StringLiteral(_) => "string literal".to_string(),
            TokenKind::Identifier(_) => "identifier".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("'{}'", other.text().unwrap_or_default()),
        }
    }

    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Bool
                | TokenKind::String
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::For
                | TokenKind::While
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Print
                | TokenKind::Input
        )
    }

    /// Returns true for `int`, `bool` and `string`.
    pub fn is_type_keyword(&self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Bool | TokenKind::String)
    }

    /// Returns the keyword for an identifier, if any.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "int" => Some(TokenKind::Int),
            "bool" => Some(TokenKind::Bool),
            "string" => Some(TokenKind::String),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "for" => Some(TokenKind::For),
            "while" => Some(TokenKind::While),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "dikhao" => Some(TokenKind::Print),
            "likho" => Some(TokenKind::Input),
            _ => None,
        }
    }

    /// Two-character operators, checked before their one-character prefixes.
    pub fn double_char(first: char, second: char) -> Option<TokenKind> {
        match (first, second) {
            ('<', '=') => Some(TokenKind::LtEq),
            ('>', '=') => Some(TokenKind::GtEq),
            ('=', '=') => Some(TokenKind::EqEq),
            ('!', '=') => Some(TokenKind::BangEq),
            ('&', '&') => Some(TokenKind::AndAnd),
            ('|', '|') => Some(TokenKind::OrOr),
            _ => None,
        }
    }

    /// Single-character operators and punctuation.
    pub fn single_char(ch: char) -> Option<TokenKind> {
        match ch {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '%' => Some(TokenKind::Percent),
            '=' => Some(TokenKind::Assign),
            '<' => Some(TokenKind::Lt),
            '>' => Some(TokenKind::Gt),
            '!' => Some(TokenKind::Bang),
            ';' => Some(TokenKind::Semicolon),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }
}
