//! Operator precedence table.

use serde::Serialize;

/// Binding strength of an operator tier, loosest first.
///
/// All binary tiers are left-associative; unary operators nest to the
/// right and bind tighter than any binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Precedence {
    LogicalOr = 1,
    LogicalAnd = 2,
    Equality = 3,
    Relational = 4,
    Additive = 5,
    Multiplicative = 6,
    Unary = 7,
}

impl Precedence {
    /// The loosest tier; a full expression starts here.
    pub const LOWEST: Precedence = Precedence::LogicalOr;

    pub fn level(self) -> u8 {
        self as u8
    }

    /// The next tighter tier.
    pub fn tighter(self) -> Option<Precedence> {
        match self {
            Precedence::LogicalOr => Some(Precedence::LogicalAnd),
            Precedence::LogicalAnd => Some(Precedence::Equality),
            Precedence::Equality => Some(Precedence::Relational),
            Precedence::Relational => Some(Precedence::Additive),
            Precedence::Additive => Some(Precedence::Multiplicative),
            Precedence::Multiplicative => Some(Precedence::Unary),
            Precedence::Unary => None,
        }
    }
}
