//! The SimpleLang parser.

use simplelang_common::{Position, Span};
use simplelang_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label, Reporter};
use simplelang_lexer::{Token, TokenKind};
use simplelang_syntax::*;
use tracing::{debug, trace};

use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::{PResult, ParseError};
use crate::recovery::{is_stmt_end, is_sync_start};

/// The SimpleLang parser.
///
/// Recursive descent with one method per grammar rule. Syntax errors are
/// returned as `Err` up to the nearest statement loop, which reports them
/// and resynchronises, so a single pass can surface several independent
/// errors.
pub struct Parser<'r> {
    tokens: Vec<Token>,
    pos: usize,
    reporter: &'r mut Reporter,
    /// Current statement/expression nesting
    depth: usize,
    max_depth: usize,
    errors: usize,
}

impl<'r> Parser<'r> {
    pub fn new(mut tokens: Vec<Token>, reporter: &'r mut Reporter) -> Self {
        let needs_eof = tokens.last().is_none_or(|t| t.kind != TokenKind::Eof);
        if needs_eof {
            let (span, pos) = tokens
                .last()
                .map(|t| (t.span.end_point(), t.pos))
                .unwrap_or((Span::DUMMY, Position::START));
            tokens.push(Token::new(TokenKind::Eof, "", span, pos));
        }

        Self {
            tokens,
            pos: 0,
            reporter,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            errors: 0,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a complete program.
    ///
    /// Recoverable errors are reported and skipped; only a nesting
    /// overflow comes back as `Err`.
    pub fn parse_program(&mut self) -> PResult<Program> {
        let start = self.current_span();
        let statements = self.statement_list(false)?;
        let span = start.merge(self.current_span());

        debug!(
            statements = statements.len(),
            errors = self.errors,
            "syntax analysis finished"
        );

        Ok(Program {
            statements,
            span,
            pos: Position::START,
        })
    }

    // ========== Statements ==========

    /// Parse statements until end of input, or until `}` inside a block.
    fn statement_list(&mut self, in_block: bool) -> PResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.at_end() {
            if in_block && self.check(&TokenKind::RBrace) {
                break;
            }

            let start = self.pos;
            match self.statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) if err.is_recoverable() => {
                    self.report(err.into_diagnostic());
                    self.synchronize(start);
                }
                Err(fatal) => return Err(fatal),
            }
        }

        Ok(statements)
    }

    fn statement(&mut self) -> PResult<Stmt> {
        self.nested(|p| p.statement_inner())
    }

    fn statement_inner(&mut self) -> PResult<Stmt> {
        match self.current_kind() {
            TokenKind::Print => self.print_stmt(),
            TokenKind::Int | TokenKind::Bool | TokenKind::String => self.declaration(),
            TokenKind::If => self.if_stmt(),
            TokenKind::While => self.while_stmt(),
            TokenKind::For => self.for_stmt(),
            TokenKind::LBrace => {
                let block = self.block()?;
                let (span, pos) = (block.span, block.pos);
                Ok(Stmt::new(StmtKind::Block(block), span, pos))
            }
            TokenKind::Identifier(_) if self.peek_kind(1) == &TokenKind::Assign => {
                let stmt = self.assignment_clause()?;
                self.expect(&TokenKind::Semicolon, "expected ';' at end of statement")?;
                Ok(self.extend_to_previous(stmt))
            }
            TokenKind::Input => self.input_stmt(),
            _ => Err(self.error_at_current(
                ErrorCode::InvalidStatement,
                "invalid statement",
                "declaration, assignment, control statement, block, print or input statement",
            )),
        }
    }

    /// `type name ;` or `type name = expr ;`
    fn declaration(&mut self) -> PResult<Stmt> {
        let stmt = self.declaration_clause()?;
        self.expect(&TokenKind::Semicolon, "expected ';' at end of statement")?;
        Ok(self.extend_to_previous(stmt))
    }

    /// A declaration without its terminator.
    fn declaration_clause(&mut self) -> PResult<Stmt> {
        let type_token = self.current().clone();
        let ty = match type_token.kind {
            TokenKind::Int => TypeName::Int,
            TokenKind::Bool => TypeName::Bool,
            TokenKind::String => TypeName::String,
            _ => {
                return Err(self.error_at_current(
                    ErrorCode::UnexpectedToken,
                    "expected a type",
                    "'int', 'bool' or 'string'",
                ));
            }
        };
        self.advance();

        let name = self.expect_ident(&format!("expected variable name after '{}'", ty))?;
        let init = if self.eat(&TokenKind::Assign) {
            Some(self.expression()?)
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::Declare { ty, name, init },
            self.span_from(type_token.span),
            type_token.pos,
        ))
    }

    /// `name = expr` without the terminator.
    fn assignment_clause(&mut self) -> PResult<Stmt> {
        let target = self.expect_ident("expected variable name")?;
        self.expect(&TokenKind::Assign, "expected '=' in assignment")?;
        let value = self.expression()?;

        let pos = target.pos;
        let span = self.span_from(target.span);
        Ok(Stmt::new(StmtKind::Assign { target, value }, span, pos))
    }

    /// `if (c) {..} {else if (c) {..}} [else {..}]`
    ///
    /// The `else if` arms are collected flat and folded into nested
    /// `ElseBranch::If` nodes afterwards, so a long chain costs no depth.
    fn if_stmt(&mut self) -> PResult<Stmt> {
        let first = self.if_arm()?;
        let mut arms = Vec::new();
        let mut else_block = None;

        while self.eat(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                arms.push(self.if_arm()?);
            } else {
                else_block = Some(self.body("else")?);
                break;
            }
        }

        let end = self.previous_span();
        let else_branch = arms.into_iter().rev().fold(
            else_block.map(ElseBranch::Block),
            |else_branch, arm| Some(ElseBranch::If(Box::new(arm.into_stmt(else_branch, end)))),
        );

        Ok(first.into_stmt(else_branch, end))
    }

    /// `if ( expr ) block`, the part every arm of a chain shares.
    fn if_arm(&mut self) -> PResult<IfArm> {
        let start = self.current().clone();
        self.advance(); // if

        let condition = self.paren_condition("if")?;
        let then_branch = self.body("if")?;

        Ok(IfArm {
            start,
            condition,
            then_branch,
        })
    }

    fn while_stmt(&mut self) -> PResult<Stmt> {
        let start = self.current().clone();
        self.advance(); // while

        let condition = self.paren_condition("while")?;
        let body = self.body("while")?;

        Ok(Stmt::new(
            StmtKind::While { condition, body },
            self.span_from(start.span),
            start.pos,
        ))
    }

    /// `for ( [init] ; cond ; [update] ) { ... }`
    fn for_stmt(&mut self) -> PResult<Stmt> {
        let start = self.current().clone();
        self.advance(); // for

        self.expect(&TokenKind::LParen, "expected '(' after 'for'")?;

        let init = if self.check(&TokenKind::Semicolon) {
            None
        } else if self.current_kind().is_type_keyword() {
            let decl = self.declaration_clause()?;
            if let StmtKind::Declare { init: None, .. } = &decl.kind {
                let diagnostic = self.diagnostic_at_current(
                    ErrorCode::MissingInitializer,
                    "for-loop declaration requires an initializer",
                    "'='",
                );
                self.report(diagnostic);
            }
            Some(Box::new(decl))
        } else {
            Some(Box::new(self.assignment_clause()?))
        };
        self.expect(&TokenKind::Semicolon, "expected ';' after for-loop initializer")?;

        let condition = self.expression()?;
        self.expect(&TokenKind::Semicolon, "expected ';' after for-loop condition")?;

        let update = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(Box::new(self.assignment_clause()?))
        };
        self.expect(&TokenKind::RParen, "expected ')' to close for-loop header")?;

        let body = self.body("for")?;

        Ok(Stmt::new(
            StmtKind::For {
                init,
                condition,
                update,
                body,
            },
            self.span_from(start.span),
            start.pos,
        ))
    }

    /// `dikhao ( expr {, expr} ) ;`
    fn print_stmt(&mut self) -> PResult<Stmt> {
        let start = self.current().clone();
        self.advance(); // dikhao

        self.expect(&TokenKind::LParen, "expected '(' after 'dikhao'")?;
        let mut args = vec![self.expression()?];
        while self.eat(&TokenKind::Comma) {
            args.push(self.expression()?);
        }
        self.expect(&TokenKind::RParen, "expected ')' to close argument list")?;
        self.expect(&TokenKind::Semicolon, "expected ';' at end of statement")?;

        Ok(Stmt::new(
            StmtKind::Print(args),
            self.span_from(start.span),
            start.pos,
        ))
    }

    /// `likho ( name ) ;`
    fn input_stmt(&mut self) -> PResult<Stmt> {
        let start = self.current().clone();
        self.advance(); // likho

        self.expect(&TokenKind::LParen, "expected '(' after 'likho'")?;
        let target = self.expect_ident("expected variable name to read into")?;
        self.expect(&TokenKind::RParen, "expected ')' after variable name")?;
        self.expect(&TokenKind::Semicolon, "expected ';' at end of statement")?;

        Ok(Stmt::new(
            StmtKind::Input(target),
            self.span_from(start.span),
            start.pos,
        ))
    }

    /// `( expr )` after `if` or `while`.
    fn paren_condition(&mut self, construct: &str) -> PResult<Expr> {
        self.expect(
            &TokenKind::LParen,
            &format!("expected '(' after '{}'", construct),
        )?;
        let condition = self.expression()?;
        self.expect(&TokenKind::RParen, "expected ')' to close expression")?;
        Ok(condition)
    }

    /// The body of a control construct. Must be a block.
    fn body(&mut self, construct: &str) -> PResult<Block> {
        if !self.check(&TokenKind::LBrace) {
            return Err(self.error_at_current(
                ErrorCode::ExpectedBlock,
                format!("expected '{{' to start the body of '{}' statement", construct),
                "'{'",
            ));
        }
        self.block()
    }

    fn block(&mut self) -> PResult<Block> {
        let start = self.current().clone();
        self.expect(&TokenKind::LBrace, "expected '{'")?;
        let statements = self.statement_list(true)?;
        self.expect(&TokenKind::RBrace, "expected '}' to close block")?;

        Ok(Block {
            statements,
            span: self.span_from(start.span),
            pos: start.pos,
        })
    }

    // ========== Expressions ==========

    fn expression(&mut self) -> PResult<Expr> {
        self.binary(Precedence::LOWEST)
    }

    /// One tier of the precedence cascade, left-folding its operators.
    fn binary(&mut self, level: Precedence) -> PResult<Expr> {
        let mut left = self.operand(level)?;
        while let Some(op) = binary_op(self.current_kind()).filter(|op| op.precedence() == level) {
            self.advance();
            let right = self.operand(level)?;
            let span = left.span.merge(right.span);
            let pos = left.pos;
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
                pos,
            );
        }
        Ok(left)
    }

    /// An operand of `level`: the next tighter tier.
    fn operand(&mut self, level: Precedence) -> PResult<Expr> {
        match level.tighter() {
            Some(Precedence::Unary) | None => self.unary(),
            Some(next) => self.binary(next),
        }
    }

    fn unary(&mut self) -> PResult<Expr> {
        let Some(op) = unary_op(self.current_kind()) else {
            return self.primary();
        };

        let start = self.current().clone();
        self.advance();
        let operand = self.nested(|p| p.unary())?;
        let span = start.span.merge(operand.span);

        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
            start.pos,
        ))
    }

    fn primary(&mut self) -> PResult<Expr> {
        let token = self.current().clone();
        let kind = match token.kind {
            TokenKind::Integer(value) => ExprKind::Int(value),
            TokenKind::StringLiteral(value) => ExprKind::String(value),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Identifier(name) => ExprKind::Ident(name),
            TokenKind::LParen => {
                self.advance();
                let mut inner = self.nested(|p| p.expression())?;
                self.expect(&TokenKind::RParen, "expected ')' to close expression")?;
                inner.span = self.span_from(token.span);
                return Ok(inner);
            }
            _ => {
                return Err(self.error_at_current(
                    ErrorCode::ExpectedExpression,
                    "expected expression",
                    "identifier, literal, or '('",
                ));
            }
        };

        self.advance();
        Ok(Expr::new(kind, token.span, token.pos))
    }

    // ========== Helper Methods ==========

    fn current(&self) -> &Token {
        // `new` guarantees a trailing Eof, so the vector is never empty.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn peek_kind(&self, n: usize) -> &TokenKind {
        let index = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[index].kind
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    fn extend_to_previous(&self, mut stmt: Stmt) -> Stmt {
        stmt.span = self.span_from(stmt.span);
        stmt
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, message: &str) -> PResult<()> {
        if self.eat(kind) {
            return Ok(());
        }

        let code = match kind {
            TokenKind::Semicolon => ErrorCode::MissingSemicolon,
            TokenKind::RParen | TokenKind::RBrace => ErrorCode::UnclosedDelimiter,
            _ => ErrorCode::UnexpectedToken,
        };
        Err(self.error_at_current(code, message, kind.describe()))
    }

    fn expect_ident(&mut self, message: &str) -> PResult<Ident> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Ident {
                    name,
                    span: token.span,
                    pos: token.pos,
                })
            }
            _ => Err(self.error_at_current(ErrorCode::ExpectedIdentifier, message, "identifier")),
        }
    }

    /// Run `f` one nesting level deeper, failing once the limit is reached.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= self.max_depth {
            let token = self.current();
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                span: token.span,
                pos: token.pos,
            });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn diagnostic_at_current(
        &self,
        code: ErrorCode,
        message: impl Into<String>,
        expected: impl Into<String>,
    ) -> Diagnostic {
        let token = self.current();
        Diagnostic::error(DiagnosticKind::Syntax, token.span, token.pos, message)
            .with_code(code)
            .with_expected(expected)
            .with_found(token.describe())
            .with_label(Label::new(token.span, "here"))
    }

    fn error_at_current(
        &self,
        code: ErrorCode,
        message: impl Into<String>,
        expected: impl Into<String>,
    ) -> ParseError {
        ParseError::syntax(self.diagnostic_at_current(code, message, expected))
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.errors += 1;
        self.reporter.report(diagnostic);
    }

    // ========== Error Recovery ==========

    /// Skip to the next statement boundary after an error.
    ///
    /// `start` is where the failed statement began; if nothing was consumed
    /// since then one token is dropped first so the loop always advances.
    fn synchronize(&mut self, start: usize) {
        let from = self.pos;

        if self.pos == start && !self.at_end() {
            let ends = is_stmt_end(self.current_kind());
            self.advance();
            if ends {
                trace!(from, to = self.pos, "recovered at ';'");
                return;
            }
        }

        while !self.at_end() && !is_sync_start(self.current_kind()) {
            let ends = is_stmt_end(self.current_kind());
            self.advance();
            if ends {
                trace!(from, to = self.pos, "recovered at ';'");
                return;
            }
        }

        trace!(
            from,
            to = self.pos,
            token = self.current_kind().name(),
            "recovered at statement start"
        );
    }
}

/// One `if (cond) { .. }` arm of an if/else-if chain.
struct IfArm {
    start: Token,
    condition: Expr,
    then_branch: Block,
}

impl IfArm {
    fn into_stmt(self, else_branch: Option<ElseBranch>, end: Span) -> Stmt {
        Stmt::new(
            StmtKind::If(IfStmt {
                condition: self.condition,
                then_branch: self.then_branch,
                else_branch,
            }),
            self.start.span.merge(end),
            self.start.pos,
        )
    }
}

fn binary_op(kind: &TokenKind) -> Option<BinOp> {
    let op = match kind {
        TokenKind::OrOr => BinOp::Or,
        TokenKind::AndAnd => BinOp::And,
        TokenKind::EqEq => BinOp::Eq,
        TokenKind::BangEq => BinOp::Ne,
        TokenKind::Lt => BinOp::Lt,
        TokenKind::LtEq => BinOp::Le,
        TokenKind::Gt => BinOp::Gt,
        TokenKind::GtEq => BinOp::Ge,
        TokenKind::Plus => BinOp::Add,
        TokenKind::Minus => BinOp::Sub,
        TokenKind::Star => BinOp::Mul,
        TokenKind::Slash => BinOp::Div,
        TokenKind::Percent => BinOp::Mod,
        _ => return None,
    };
    Some(op)
}

fn unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Bang => Some(UnaryOp::Not),
        TokenKind::Minus => Some(UnaryOp::Neg),
        _ => None,
    }
}
