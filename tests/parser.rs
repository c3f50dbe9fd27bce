//! Integration tests for simplelang-parser crate.

use simplelang_common::Position;
use simplelang_diagnostic::Reporter;
use simplelang_diagnostic::ErrorCode;
use simplelang_parser::{AnalyzerConfig, analyze, analyze_with_config, parse, tokenize};
use simplelang_syntax::*;

fn parse_ok(source: &str) -> Program {
    let analysis = analyze(source);
    assert!(
        analysis.is_success(),
        "unexpected errors: {:?}",
        analysis.reporter.errors()
    );
    analysis.program.expect("program")
}

fn declared_init(stmt: &Stmt) -> &Expr {
    match &stmt.kind {
        StmtKind::Declare {
            init: Some(init), ..
        } => init,
        other => panic!("expected declaration with initializer, got {:?}", other),
    }
}

fn int(value: i64) -> ExprKind {
    ExprKind::Int(value)
}

fn binary(op: BinOp, left: ExprKind, right: ExprKind) -> ExprKind {
    use simplelang_common::Span;
    let wrap = |kind| Box::new(Expr::new(kind, Span::DUMMY, Position::START));
    ExprKind::Binary {
        op,
        left: wrap(left),
        right: wrap(right),
    }
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_parse_declarations() {
    let program = parse_ok("int x; bool b = true; string s = \"hi\";");
    assert_eq!(program.statements.len(), 3);

    match &program.statements[0].kind {
        StmtKind::Declare { ty, name, init } => {
            assert_eq!(*ty, TypeName::Int);
            assert_eq!(name.name, "x");
            assert!(init.is_none());
        }
        other => panic!("expected declaration, got {:?}", other),
    }
    assert_eq!(declared_init(&program.statements[2]).kind, ExprKind::String("hi".into()));
}

#[test]
fn test_parse_assignment() {
    let program = parse_ok("x = y;");
    match &program.statements[0].kind {
        StmtKind::Assign { target, value } => {
            assert_eq!(target.name, "x");
            assert_eq!(value.kind, ExprKind::Ident("y".into()));
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_print_arguments() {
    let program = parse_ok("dikhao(\"x =\", x, x + 1);");
    match &program.statements[0].kind {
        StmtKind::Print(args) => assert_eq!(args.len(), 3),
        other => panic!("expected print, got {:?}", other),
    }
}

#[test]
fn test_parse_input() {
    let program = parse_ok("likho(n);");
    match &program.statements[0].kind {
        StmtKind::Input(target) => assert_eq!(target.name, "n"),
        other => panic!("expected input, got {:?}", other),
    }
}

#[test]
fn test_parse_nested_blocks() {
    let program = parse_ok("{ { } int x = 1; }");
    match &program.statements[0].kind {
        StmtKind::Block(block) => {
            assert_eq!(block.statements.len(), 2);
            assert!(matches!(&block.statements[0].kind, StmtKind::Block(b) if b.statements.is_empty()));
        }
        other => panic!("expected block, got {:?}", other),
    }
}

#[test]
fn test_parse_for_loop() {
    let program = parse_ok("for (i = 0; i < 10; i = i + 1) { dikhao(i); }");
    match &program.statements[0].kind {
        StmtKind::For {
            init,
            condition,
            update,
            body,
        } => {
            assert!(matches!(init.as_deref().map(|s| &s.kind), Some(StmtKind::Assign { .. })));
            assert!(matches!(condition.kind, ExprKind::Binary { op: BinOp::Lt, .. }));
            assert!(update.is_some());
            assert_eq!(body.statements.len(), 1);
        }
        other => panic!("expected for, got {:?}", other),
    }
}

#[test]
fn test_statement_positions() {
    let program = parse_ok("int x = 1;\n  while (x) { }");
    assert_eq!(program.pos, Position::new(1, 1));
    assert_eq!(program.statements[0].pos, Position::new(1, 1));
    assert_eq!(program.statements[1].pos, Position::new(2, 3));
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let program = parse_ok("int x = 1 + 2 * 3;");
    assert_eq!(
        declared_init(&program.statements[0]).kind,
        binary(BinOp::Add, int(1), binary(BinOp::Mul, int(2), int(3)))
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    let program = parse_ok("int x = 1 - 2 - 3;");
    assert_eq!(
        declared_init(&program.statements[0]).kind,
        binary(BinOp::Sub, binary(BinOp::Sub, int(1), int(2)), int(3))
    );
}

#[test]
fn test_comparison_below_arithmetic() {
    let program = parse_ok("bool b = a + 1 < b * 2 == true;");
    match &declared_init(&program.statements[0]).kind {
        ExprKind::Binary { op, left, .. } => {
            assert_eq!(*op, BinOp::Eq);
            assert!(matches!(left.kind, ExprKind::Binary { op: BinOp::Lt, .. }));
        }
        other => panic!("expected binary, got {:?}", other),
    }
}

#[test]
fn test_unary_minus_on_literal() {
    let program = parse_ok("int x = -5 % 3;");
    match &declared_init(&program.statements[0]).kind {
        ExprKind::Binary { op, left, .. } => {
            assert_eq!(*op, BinOp::Mod);
            assert!(matches!(left.kind, ExprKind::Unary { op: UnaryOp::Neg, .. }));
        }
        other => panic!("expected binary, got {:?}", other),
    }
}

#[test]
fn test_parentheses_override_precedence() {
    let program = parse_ok("int x = (1 + 2) * 3;");
    assert_eq!(
        declared_init(&program.statements[0]).kind,
        binary(BinOp::Mul, binary(BinOp::Add, int(1), int(2)), int(3))
    );
}

// ============================================================================
// End to End
// ============================================================================

#[test]
fn test_declare_then_if_with_print() {
    let program = parse_ok("int x = 5; if (x > 3) { dikhao(x); }");
    assert_eq!(program.statements.len(), 2);

    assert!(matches!(
        program.statements[0].kind,
        StmtKind::Declare { init: Some(_), .. }
    ));

    let StmtKind::If(if_stmt) = &program.statements[1].kind else {
        panic!("expected if statement");
    };
    assert!(matches!(
        if_stmt.condition.kind,
        ExprKind::Binary { op: BinOp::Gt, .. }
    ));
    assert!(if_stmt.else_branch.is_none());
    assert_eq!(if_stmt.then_branch.statements.len(), 1);

    match &if_stmt.then_branch.statements[0].kind {
        StmtKind::Print(args) => {
            assert_eq!(args.len(), 1);
            assert_eq!(args[0].kind, ExprKind::Ident("x".into()));
        }
        other => panic!("expected print, got {:?}", other),
    }
}

#[test]
fn test_dump_of_end_to_end_program() {
    let program = parse_ok("int x = 5; if (x > 3) { dikhao(x); }");
    let expected = "\
Program
  DeclareAndAssign: int x
    IntegerLiteral: 5
  If
    Binary: >
      Identifier: x
      IntegerLiteral: 3
    Block
      Print
        Identifier: x
";
    assert_eq!(printer::dump(&program), expected);
}

#[test]
fn test_parse_from_tokens() {
    let mut reporter = Reporter::new();
    let tokens = tokenize("dikhao(1);", &mut reporter);
    let program = parse(tokens, &mut reporter).expect("program");
    assert_eq!(program.statements.len(), 1);
    assert!(!reporter.has_errors());
}

// ============================================================================
// Nesting
// ============================================================================

/// `levels` nested `while` loops around one print.
fn nested_whiles(levels: usize) -> String {
    format!(
        "{}dikhao(a);{}",
        "while (a) { ".repeat(levels),
        " }".repeat(levels)
    )
}

#[test]
fn test_long_else_if_chain() {
    let mut source = String::from("int x = 0;\nif (x == 0) { dikhao(0); }");
    for i in 1..200 {
        source.push_str(&format!(" else if (x == {i}) {{ dikhao({i}); }}"));
    }
    source.push_str(" else { dikhao(x); }");

    let program = parse_ok(&source);
    assert_eq!(program.statements.len(), 2);

    let mut arms = 0;
    let mut stmt = &program.statements[1];
    loop {
        let StmtKind::If(if_stmt) = &stmt.kind else {
            panic!("expected if statement, got {:?}", stmt.kind);
        };
        arms += 1;
        assert_eq!(if_stmt.then_branch.statements.len(), 1);
        match &if_stmt.else_branch {
            Some(ElseBranch::If(next)) => stmt = next.as_ref(),
            Some(ElseBranch::Block(block)) => {
                assert_eq!(block.statements.len(), 1);
                break;
            }
            None => panic!("chain ended without else"),
        }
    }
    assert_eq!(arms, 200);
}

#[test]
fn test_else_if_arm_spans_to_end_of_chain() {
    let source = "if (a) { } else if (b) { } else { }";
    let program = parse_ok(source);
    let outer = &program.statements[0];
    let StmtKind::If(if_stmt) = &outer.kind else {
        panic!("expected if statement");
    };
    let Some(ElseBranch::If(inner)) = &if_stmt.else_branch else {
        panic!("expected else-if");
    };
    assert_eq!(inner.pos, Position::new(1, 17));
    assert_eq!(inner.span.slice(source), "if (b) { } else { }");
    assert_eq!(outer.span.slice(source), source);
}

#[test]
fn test_hundred_nested_blocks() {
    let program = parse_ok(&nested_whiles(100));

    let mut depth = 0;
    let mut stmt = &program.statements[0];
    while let StmtKind::While { body, .. } = &stmt.kind {
        depth += 1;
        stmt = &body.statements[0];
    }
    assert_eq!(depth, 100);
    assert!(matches!(stmt.kind, StmtKind::Print(_)));

    let bare = format!("{}x = 1;{}", "{ ".repeat(120), " }".repeat(120));
    assert_eq!(parse_ok(&bare).statements.len(), 1);
}

#[test]
fn test_each_statement_costs_one_level() {
    let config = AnalyzerConfig::new().max_depth(4);

    // Three loops plus the print inside them.
    let analysis = analyze_with_config(&nested_whiles(3), &config);
    assert!(analysis.is_success(), "{:?}", analysis.reporter.errors());

    let analysis = analyze_with_config(&nested_whiles(4), &config);
    assert!(analysis.program.is_none());
    assert_eq!(
        analysis.reporter.errors()[0].code,
        Some(ErrorCode::NestingTooDeep)
    );
}
