//! Statement-level AST definitions.
//! 语句级 AST 定义。

use crate::Expr;
use serde::Serialize;
use simplelang_common::{Position, Span};
use std::fmt;

/// The root of a parsed source file.
/// 已解析源文件的根节点。
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
    pub pos: Position,
}

/// An identifier with its location.
/// 带位置信息的标识符。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub name: String,
    pub span: Span,
    pub pos: Position,
}

/// A declared variable type.
/// 声明的变量类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Int,
    Bool,
    String,
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeName::Int => "int",
            TypeName::Bool => "bool",
            TypeName::String => "string",
        };
        f.write_str(name)
    }
}

/// A statement.
/// 语句。
#[derive(Debug, Clone, Serialize)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    pub pos: Position,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span, pos: Position) -> Self {
        Self { kind, span, pos }
    }
}

/// Statement kind.
/// 语句类型。
#[derive(Debug, Clone, Serialize)]
pub enum StmtKind {
    /// `int x;` or `int x = expr;`
    Declare {
        ty: TypeName,
        name: Ident,
        init: Option<Expr>,
    },
    /// `x = expr;`
    Assign { target: Ident, value: Expr },
    /// `if (cond) { ... } else ...`
    If(IfStmt),
    /// `while (cond) { ... }`
    While { condition: Expr, body: Block },
    /// `for (init; cond; update) { ... }`
    ///
    /// `init` is a `Declare` with an initializer or an `Assign`;
    /// `update` is an `Assign`.
    For {
        init: Option<Box<Stmt>>,
        condition: Expr,
        update: Option<Box<Stmt>>,
        body: Block,
    },
    /// `{ ... }`
    Block(Block),
    /// `dikhao(a, b, ...);`
    Print(Vec<Expr>),
    /// `likho(x);`
    Input(Ident),
}

/// A brace-delimited statement list. May be empty.
/// 花括号包围的语句列表，可以为空。
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
    pub pos: Position,
}

/// An `if` statement. The then-branch is always a block.
/// `if` 语句。then 分支总是一个块。
#[derive(Debug, Clone, Serialize)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Block,
    pub else_branch: Option<ElseBranch>,
}

/// What follows `else`.
/// `else` 之后的部分。
#[derive(Debug, Clone, Serialize)]
pub enum ElseBranch {
    Block(Block),
    /// `else if ...`
    If(Box<Stmt>),
}
