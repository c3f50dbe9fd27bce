//! Error codes for SimpleLang diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexical (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,
    IntegerOverflow,

    // Syntax (E0100 - E0199)
    UnexpectedToken,
    ExpectedExpression,
    ExpectedIdentifier,
    MissingSemicolon,
    UnclosedDelimiter,
    InvalidStatement,
    ExpectedBlock,
    MissingInitializer,

    // Internal parser failures (E0200 - E0299)
    NestingTooDeep,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::IntegerOverflow => "E0003",

            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::ExpectedExpression => "E0101",
            ErrorCode::ExpectedIdentifier => "E0102",
            ErrorCode::MissingSemicolon => "E0103",
            ErrorCode::UnclosedDelimiter => "E0104",
            ErrorCode::InvalidStatement => "E0105",
            ErrorCode::ExpectedBlock => "E0106",
            ErrorCode::MissingInitializer => "E0107",

            ErrorCode::NestingTooDeep => "E0200",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::IntegerOverflow => "integer literal does not fit in 64 bits",

            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::ExpectedExpression => "expected an expression",
            ErrorCode::ExpectedIdentifier => "expected an identifier",
            ErrorCode::MissingSemicolon => "missing semicolon",
            ErrorCode::UnclosedDelimiter => "unclosed delimiter",
            ErrorCode::InvalidStatement => "token cannot start a statement",
            ErrorCode::ExpectedBlock => "body must be a block",
            ErrorCode::MissingInitializer => "declaration needs an initializer here",

            ErrorCode::NestingTooDeep => "program nesting is too deep",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => {
                Some("add a closing quote `\"` on the same line as the opening one")
            }
            ErrorCode::MissingSemicolon => Some("add `;` at the end of the statement"),
            ErrorCode::UnclosedDelimiter => Some("add the matching closing delimiter"),
            ErrorCode::ExpectedBlock => Some("wrap the body in `{ ... }`"),
            ErrorCode::MissingInitializer => Some("give the loop variable a value, e.g. `int i = 0`"),
            ErrorCode::NestingTooDeep => Some("split the expression or block into smaller pieces"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_ranged() {
        assert_eq!(ErrorCode::UnterminatedString.as_str(), "E0002");
        assert_eq!(ErrorCode::MissingSemicolon.as_str(), "E0103");
        assert_eq!(ErrorCode::NestingTooDeep.as_str(), "E0200");
    }
}
