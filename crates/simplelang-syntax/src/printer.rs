//! Indented tree dump of the AST, one node per line.
//!
//! ```text
//! Program
//!   DeclareAndAssign: int x
//!     IntegerLiteral: 5
//! ```

use crate::{Block, ElseBranch, Expr, ExprKind, IfStmt, Program, Stmt, StmtKind};

/// Dump a program with two-space indentation.
pub fn dump(program: &Program) -> String {
    let mut printer = AstPrinter::new("  ");
    printer.program(program);
    printer.finish()
}

/// Dump a single expression.
pub fn dump_expr(expr: &Expr) -> String {
    let mut printer = AstPrinter::new("  ");
    printer.expr(expr);
    printer.finish()
}

/// Tree printer for building indented output.
pub struct AstPrinter {
    output: String,
    indent_level: usize,
    indent: &'static str,
}

impl AstPrinter {
    pub fn new(indent: &'static str) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    /// Write one node line at the current depth.
    fn line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent_level += 1;
        f(self);
        self.indent_level -= 1;
    }

    pub fn program(&mut self, program: &Program) {
        self.line("Program");
        self.nested(|p| {
            for stmt in &program.statements {
                p.stmt(stmt);
            }
        });
    }

    pub fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Declare { ty, name, init } => match init {
                Some(init) => {
                    self.line(&format!("DeclareAndAssign: {} {}", ty, name.name));
                    self.nested(|p| p.expr(init));
                }
                None => self.line(&format!("Declare: {} {}", ty, name.name)),
            },
            StmtKind::Assign { target, value } => {
                self.line(&format!("Assign: {}", target.name));
                self.nested(|p| p.expr(value));
            }
            StmtKind::If(if_stmt) => self.if_stmt(if_stmt),
            StmtKind::While { condition, body } => {
                self.line("While");
                self.nested(|p| {
                    p.expr(condition);
                    p.block(body);
                });
            }
            StmtKind::For {
                init,
                condition,
                update,
                body,
            } => {
                self.line("For");
                self.nested(|p| {
                    if let Some(init) = init {
                        p.stmt(init);
                    }
                    p.expr(condition);
                    if let Some(update) = update {
                        p.stmt(update);
                    }
                    p.block(body);
                });
            }
            StmtKind::Block(block) => self.block(block),
            StmtKind::Print(args) => {
                self.line("Print");
                self.nested(|p| {
                    for arg in args {
                        p.expr(arg);
                    }
                });
            }
            StmtKind::Input(target) => self.line(&format!("Input: {}", target.name)),
        }
    }

    fn if_stmt(&mut self, if_stmt: &IfStmt) {
        self.line("If");
        self.nested(|p| {
            p.expr(&if_stmt.condition);
            p.block(&if_stmt.then_branch);
            match &if_stmt.else_branch {
                Some(ElseBranch::Block(block)) => {
                    p.line("Else");
                    p.nested(|p| p.block(block));
                }
                Some(ElseBranch::If(stmt)) => {
                    p.line("Else");
                    p.nested(|p| p.stmt(stmt));
                }
                None => {}
            }
        });
    }

    fn block(&mut self, block: &Block) {
        self.line("Block");
        self.nested(|p| {
            for stmt in &block.statements {
                p.stmt(stmt);
            }
        });
    }

    pub fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Int(n) => self.line(&format!("IntegerLiteral: {}", n)),
            ExprKind::Bool(b) => self.line(&format!("BooleanLiteral: {}", b)),
            ExprKind::String(s) => self.line(&format!("StringLiteral: {:?}", s)),
            ExprKind::Ident(name) => self.line(&format!("Identifier: {}", name)),
            ExprKind::Binary { op, left, right } => {
                self.line(&format!("Binary: {}", op.symbol()));
                self.nested(|p| {
                    p.expr(left);
                    p.expr(right);
                });
            }
            ExprKind::Unary { op, operand } => {
                self.line(&format!("Unary: {}", op.symbol()));
                self.nested(|p| p.expr(operand));
            }
        }
    }
}
