//! Display formatting for expressions and statements
//!
//! Unlike a pretty-printer this output is canonical: every infix node is wrapped in
//! parentheses, so the text is unambiguous under the flat left-associative grammar and
//! doubles as the identity the simplifier compares between passes.

use super::{Expression, Statement};
use std::fmt;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(name) => f.write_str(name),
            Expression::Boolean(value) => f.write_str(if *value { "1" } else { "0" }),
            Expression::Prefix { operator, operand } => write!(f, "{}{}", operator, operand),
            Expression::Infix {
                operator,
                left,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Table(expr) => write!(f, "table {}", expr),
            Statement::Simplify(expr) => write!(f, "simplify {}", expr),
        }
    }
}
