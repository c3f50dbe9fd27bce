//! Expression AST nodes.
//! 表达式 AST 节点。

use crate::Precedence;
use serde::Serialize;
use simplelang_common::{Position, Span};

/// An expression.
/// 表达式。
#[derive(Debug, Clone, Serialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub pos: Position,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span, pos: Position) -> Self {
        Self { kind, span, pos }
    }
}

/// Expression kind.
/// 表达式类型。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExprKind {
    /// Integer literal
    /// 整数字面量
    Int(i64),
    /// Boolean literal
    /// 布尔字面量
    Bool(bool),
    /// String literal, escapes already decoded
    /// 字符串字面量，转义已解码
    String(String),
    /// Variable reference
    /// 变量引用
    Ident(String),

    /// Binary operation `a + b`
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Unary operation `!a` or `-a`
    Unary { op: UnaryOp, operand: Box<Expr> },
}

/// Binary operators.
/// 二元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    // Logical
    And,
    Or,
}

impl BinOp {
    pub fn precedence(self) -> Precedence {
        match self {
            BinOp::Or => Precedence::LogicalOr,
            BinOp::And => Precedence::LogicalAnd,
            BinOp::Eq | BinOp::Ne => Precedence::Equality,
            BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => Precedence::Relational,
            BinOp::Add | BinOp::Sub => Precedence::Additive,
            BinOp::Mul | BinOp::Div | BinOp::Mod => Precedence::Multiplicative,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

/// Unary operators.
/// 一元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `!x`
    Not,
}

impl UnaryOp {
    pub fn precedence(self) -> Precedence {
        Precedence::Unary
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

// Expr holds spans that differ between otherwise identical trees; compare
// structure only.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}
