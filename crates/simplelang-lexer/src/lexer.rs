//! The SimpleLang lexer.
//! SimpleLang 词法分析器。

use crate::token::{Token, TokenKind};
use simplelang_common::{Position, Span};
use simplelang_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label, Reporter};
use tracing::{debug, trace};

/// The SimpleLang lexer.
/// SimpleLang 词法分析器。
///
/// Converts source code into a sequence of tokens. Malformed input never
/// stops the scan: each problem is reported and the offending character
/// skipped, so the result always ends with an `Eof` token.
pub struct Lexer<'src, 'r> {
    source: &'src str,
    /// Character iterator with byte offsets
    /// 带字节偏移的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Byte offset of the next character
    /// 下一个字符的字节偏移
    pos: usize,
    /// Line/column of the next character
    /// 下一个字符的行号/列号
    loc: Position,
    reporter: &'r mut Reporter,
    errors: usize,
}

impl<'src, 'r> Lexer<'src, 'r> {
    /// Create a new lexer for the given source code.
    /// 为给定源代码创建新的词法分析器。
    pub fn new(source: &'src str, reporter: &'r mut Reporter) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            pos: 0,
            loc: Position::START,
            reporter,
            errors: 0,
        }
    }

    /// Tokenize the entire source.
    /// 对整个源码进行词法分析。
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        debug!(
            tokens = tokens.len(),
            errors = self.errors,
            "lexical analysis finished"
        );
        tokens
    }

    fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let start = self.pos;
            let start_loc = self.loc;

            let Some((_, ch)) = self.advance() else {
                return Token::new(TokenKind::Eof, "", Span::point(start), start_loc);
            };

            let kind = match ch {
                '/' if self.peek_char() == Some('/') => {
                    self.skip_line_comment();
                    continue;
                }

                '"' => match self.string_literal(start, start_loc) {
                    Some(kind) => kind,
                    None => continue,
                },

                '0'..='9' => self.integer(ch, start, start_loc),

                c if c.is_ascii_alphabetic() => self.identifier(),

                c => match self.operator(c) {
                    Some(kind) => kind,
                    None => {
                        self.error_unexpected_char(c, start, start_loc);
                        continue;
                    }
                },
            };

            let span = Span::new(start, self.pos);
            return Token::new(kind, span.slice(self.source), span, start_loc);
        }
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.pos = pos + ch.len_utf8();
            self.loc = self.loc.advance(ch);
        }
        result
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek_char() {
            self.advance();
        }
    }

    /// Skip a line comment (// to end of line). The newline is left for
    /// the whitespace skipper.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Scan a string literal; the opening quote is already consumed.
    /// 扫描字符串字面量；开头的引号已被消耗。
    ///
    /// On a newline or end of input before the closing quote, reports an
    /// unterminated string at the opening quote, consumes the newline and
    /// yields no token.
    fn string_literal(&mut self, start: usize, start_loc: Position) -> Option<TokenKind> {
        let mut value = String::new();

        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    return Some(TokenKind::StringLiteral(value));
                }
                Some('\n') | None => {
                    self.error_unterminated_string(start, start_loc);
                    self.advance();
                    return None;
                }
                Some('\\') => {
                    self.advance();
                    match self.advance() {
                        Some((_, escaped)) => value.push(Self::unescape(escaped)),
                        None => {
                            self.error_unterminated_string(start, start_loc);
                            return None;
                        }
                    }
                }
                Some(ch) => {
                    self.advance();
                    value.push(ch);
                }
            }
        }
    }

    /// Decode the character after a backslash. Unknown escapes stand for
    /// the character itself.
    fn unescape(ch: char) -> char {
        match ch {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            other => other,
        }
    }

    /// Scan a maximal run of digits. Values wider than 64 bits wrap and
    /// raise a warning.
    fn integer(&mut self, first: char, start: usize, start_loc: Position) -> TokenKind {
        let mut value = i64::from(first as u8 - b'0');
        let mut overflowed = false;

        while let Some(ch) = self.peek_char() {
            let Some(digit) = ch.to_digit(10) else {
                break;
            };
            let digit = i64::from(digit);
            value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => v,
                None => {
                    overflowed = true;
                    value.wrapping_mul(10).wrapping_add(digit)
                }
            };
            self.advance();
        }

        if overflowed {
            let span = Span::new(start, self.pos);
            self.reporter.report(
                Diagnostic::warning(
                    DiagnosticKind::Lexical,
                    span,
                    start_loc,
                    format!(
                        "integer literal '{}' does not fit in 64 bits",
                        span.slice(self.source)
                    ),
                )
                .with_code(ErrorCode::IntegerOverflow),
            );
        }

        TokenKind::Integer(value)
    }

    /// Scan an identifier or keyword; the first letter is already consumed.
    /// 扫描标识符或关键字；首字母已被消耗。
    fn identifier(&mut self) -> TokenKind {
        let start = self.pos - 1;

        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start..self.pos];
        TokenKind::keyword_from_str(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()))
    }

    /// Match an operator or punctuation, preferring two-character forms.
    /// 匹配运算符或标点，优先匹配双字符形式。
    fn operator(&mut self, first: char) -> Option<TokenKind> {
        if let Some(second) = self.peek_char() {
            if let Some(kind) = TokenKind::double_char(first, second) {
                self.advance();
                return Some(kind);
            }
        }
        TokenKind::single_char(first)
    }

    fn error_unexpected_char(&mut self, ch: char, start: usize, loc: Position) {
        let span = Span::new(start, self.pos);
        trace!(%loc, ?ch, "skipping unexpected character");
        self.report_error(
            Diagnostic::error(
                DiagnosticKind::Lexical,
                span,
                loc,
                format!("unexpected character '{}'", ch),
            )
            .with_code(ErrorCode::UnexpectedCharacter)
            .with_label(Label::new(span, "unexpected character here")),
        );
    }

    fn error_unterminated_string(&mut self, start: usize, loc: Position) {
        let span = Span::new(start, self.pos);
        self.report_error(
            Diagnostic::error(
                DiagnosticKind::Lexical,
                span,
                loc,
                "unterminated string literal",
            )
            .with_code(ErrorCode::UnterminatedString)
            .with_label(Label::new(Span::new(start, start + 1), "string starts here")),
        );
    }

    fn report_error(&mut self, diagnostic: Diagnostic) {
        self.errors += 1;
        self.reporter.report(diagnostic);
    }
}
