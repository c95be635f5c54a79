/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOp {
    // Logical
    /// Logical OR (`or`)
    Or,
    /// Logical AND (`and`)
    And,

    // Membership
    /// Membership test (`in`)
    In,

    // Comparison
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Pattern match (`~=`)
    Match,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
}

impl BinOp {
    /// Tag spelling used in the serialized AST.
    ///
    /// These exact spellings are consumed by downstream evaluators and must
    /// not be renamed.
    pub fn tag(&self) -> &'static str {
        match self {
            BinOp::Or => "||",
            BinOp::And => "&&",
            BinOp::In => "IN",
            BinOp::Equal => "==",
            BinOp::NotEqual => "!=",
            BinOp::Match => "MATCH",
            BinOp::LessEqual => "<=",
            BinOp::GreaterEqual => ">=",
            BinOp::LessThan => "<",
            BinOp::GreaterThan => ">",
        }
    }
}

/// Unary (prefix) operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    /// Numeric negation (`-`)
    ///
    /// Only applies when the lexer did not already fold the sign into a
    /// number literal: `-foo` negates, `-10` is a plain number.
    Neg,
    /// Logical negation (`not`)
    Not,
}

impl UnaryOp {
    /// Tag spelling used in the serialized AST.
    pub fn tag(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}
