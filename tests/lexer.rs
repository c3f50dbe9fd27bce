//! Integration tests for simplelang-lexer crate.

use simplelang_common::Position;
use simplelang_diagnostic::{ErrorCode, Reporter};
use simplelang_lexer::{Token, TokenKind, tokenize};

fn lex(source: &str) -> Vec<TokenKind> {
    let mut reporter = Reporter::new();
    tokenize(source, &mut reporter)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn lex_with_reporter(source: &str) -> (Vec<Token>, Reporter) {
    let mut reporter = Reporter::new();
    let tokens = tokenize(source, &mut reporter);
    (tokens, reporter)
}

// ============================================================================
// Basic Token Tests
// ============================================================================

#[test]
fn test_keywords() {
    assert_eq!(
        lex("int bool string if else for while true false dikhao likho"),
        vec![
            TokenKind::Int,
            TokenKind::Bool,
            TokenKind::String,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::While,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Print,
            TokenKind::Input,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(
        lex("If INT"),
        vec![
            TokenKind::Identifier("If".into()),
            TokenKind::Identifier("INT".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifiers() {
    assert_eq!(
        lex("x count_2 intx"),
        vec![
            TokenKind::Identifier("x".into()),
            TokenKind::Identifier("count_2".into()),
            TokenKind::Identifier("intx".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_integers() {
    assert_eq!(
        lex("0 42 007"),
        vec![
            TokenKind::Integer(0),
            TokenKind::Integer(42),
            TokenKind::Integer(7),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        lex(";{}(),"),
        vec![
            TokenKind::Semicolon,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Comma,
            TokenKind::Eof,
        ]
    );
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_less_equal_is_one_token() {
    assert_eq!(lex("<="), vec![TokenKind::LtEq, TokenKind::Eof]);
}

#[test]
fn test_operators() {
    assert_eq!(
        lex("+ - * / % = < > <= >= == != && || !"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Assign,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::EqEq,
            TokenKind::BangEq,
            TokenKind::AndAnd,
            TokenKind::OrOr,
            TokenKind::Bang,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_maximal_munch_without_spaces() {
    assert_eq!(
        lex("a<=b==!c"),
        vec![
            TokenKind::Identifier("a".into()),
            TokenKind::LtEq,
            TokenKind::Identifier("b".into()),
            TokenKind::EqEq,
            TokenKind::Bang,
            TokenKind::Identifier("c".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lone_ampersand_is_an_error() {
    let (tokens, reporter) = lex_with_reporter("a & b | c");
    assert_eq!(reporter.error_count(), 2);
    assert_eq!(tokens.len(), 4);
    assert_eq!(reporter.errors()[0].code, Some(ErrorCode::UnexpectedCharacter));
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_string_escapes() {
    assert_eq!(
        lex(r#""a\nb" "\t\r\\\"""#),
        vec![
            TokenKind::StringLiteral("a\nb".into()),
            TokenKind::StringLiteral("\t\r\\\"".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unknown_escape_is_literal() {
    let (tokens, reporter) = lex_with_reporter(r#""\q""#);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral("q".into()));
    assert!(!reporter.has_errors());
}

#[test]
fn test_string_keeps_raw_lexeme() {
    let (tokens, _) = lex_with_reporter(r#""a\tb""#);
    assert_eq!(tokens[0].lexeme, r#""a\tb""#);
}

#[test]
fn test_unterminated_string_at_end_of_input() {
    let (tokens, reporter) = lex_with_reporter("x = \"abc");
    assert_eq!(reporter.error_count(), 1);

    let error = &reporter.errors()[0];
    assert_eq!(error.code, Some(ErrorCode::UnterminatedString));
    assert_eq!(error.pos, Position::new(1, 5));
    assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
}

#[test]
fn test_unterminated_string_resumes_on_next_line() {
    let (tokens, reporter) = lex_with_reporter("string s = \"oops\nint y;");
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(reporter.errors()[0].pos, Position::new(1, 12));

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        &kinds[3..],
        &[
            TokenKind::Int,
            TokenKind::Identifier("y".into()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

// ============================================================================
// Positions and Recovery
// ============================================================================

#[test]
fn test_positions() {
    let (tokens, _) = lex_with_reporter("int x;\n  x = 10;");
    let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.line(), t.column())).collect();
    assert_eq!(
        positions,
        vec![(1, 1), (1, 5), (1, 6), (2, 3), (2, 5), (2, 7), (2, 9), (2, 10)]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        lex("// header\nint // trailing\n// last"),
        vec![TokenKind::Int, TokenKind::Eof]
    );
}

#[test]
fn test_eof_after_garbage() {
    let inputs = ["", "@@@", "\"", "\"\\", "#\n#", "&|"];
    for input in inputs {
        let tokens = lex(input);
        assert_eq!(tokens.last(), Some(&TokenKind::Eof), "input {:?}", input);
    }
}

#[test]
fn test_bad_characters_are_skipped() {
    let (tokens, reporter) = lex_with_reporter("int $x = 1;");
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(reporter.errors()[0].pos, Position::new(1, 5));
    assert_eq!(tokens.len(), 6);
}

#[test]
fn test_integer_overflow_wraps_with_warning() {
    let (tokens, reporter) = lex_with_reporter("99999999999999999999");
    assert!(!reporter.has_errors());
    assert_eq!(reporter.warning_count(), 1);
    assert!(matches!(tokens[0].kind, TokenKind::Integer(_)));
}

#[test]
fn test_token_names() {
    assert_eq!(TokenKind::LtEq.name(), "LESS_EQUAL");
    assert_eq!(TokenKind::Star.name(), "MULTIPLY");
    assert_eq!(TokenKind::Identifier("x".into()).name(), "IDENTIFIER");
    assert_eq!(TokenKind::StringLiteral(String::new()).name(), "STRING_LITERAL");
    assert_eq!(TokenKind::Eof.name(), "EOF");
}
