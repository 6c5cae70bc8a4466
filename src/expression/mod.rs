//! Expression and statement trees for propositional logic
//!
//! A parsed line becomes a [`Statement`] wrapping exactly one [`Expression`]. The
//! expression tree is a closed enum: every consumer (evaluator, truth table,
//! simplifier, renderer) matches on all four variants.
//!
//! Each node owns its children through a `Box`, so no subtree is ever shared. A
//! rewrite that wants to reuse a subtree in two places has to clone it.
//!
//! # Surface glyphs and actions
//!
//! Binary nodes keep the operator exactly as written (`+`, `|`, `*`, `&`, ...) for
//! display, and separately record its normalised [`Action`]. Evaluation and rewriting
//! only ever look at the action, so `a + b` and `a | b` behave identically:
//!
//! ```
//! use proposition::{Action, Expression};
//!
//! let plus = Expression::infix("+", Expression::identifier("a"), Expression::identifier("b")).unwrap();
//! let pipe = Expression::infix("|", Expression::identifier("a"), Expression::identifier("b")).unwrap();
//!
//! assert_eq!(plus.action(), Some(Action::Or));
//! assert_eq!(pipe.action(), Some(Action::Or));
//! assert_eq!(plus.literal(), "(a + b)");
//! assert_eq!(pipe.literal(), "(a | b)");
//! ```

mod display;
pub(crate) mod eval;

pub use eval::evaluate;

use std::fmt;

/// Normalised meaning of a binary operator, independent of how it was spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Disjunction: `+`, `|` or `||`
    Or,
    /// Conjunction: `*`, `&` or `&&`
    And,
    /// Material implication: `->`
    Implication,
    /// Biconditional: `<->`
    Bicondition,
}

impl Action {
    /// Map a surface glyph to its action
    pub fn from_operator(operator: &str) -> Option<Action> {
        match operator {
            "+" | "|" | "||" => Some(Action::Or),
            "*" | "&" | "&&" => Some(Action::And),
            "->" => Some(Action::Implication),
            "<->" => Some(Action::Bicondition),
            _ => None,
        }
    }

    /// The glyph used when the simplifier has to build a node of this action itself
    pub fn canonical_operator(self) -> &'static str {
        match self {
            Action::Or => "+",
            Action::And => "*",
            Action::Implication => "->",
            Action::Bicondition => "<->",
        }
    }

    /// Apply the connective to two truth values
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Action::Or => left || right,
            Action::And => left && right,
            Action::Implication => !left || right,
            Action::Bicondition => (!left || right) && (!right || left),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Or => "or",
            Action::And => "and",
            Action::Implication => "->",
            Action::Bicondition => "<->",
        })
    }
}

/// Unary operators; negation is the only one the grammar has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// Logical negation, written `!`
    Not,
}

impl PrefixOperator {
    /// Map a surface glyph to its prefix operator
    pub fn from_operator(operator: &str) -> Option<PrefixOperator> {
        match operator {
            "!" => Some(PrefixOperator::Not),
            _ => None,
        }
    }

    /// Apply the operator to a truth value
    pub fn apply(self, operand: bool) -> bool {
        match self {
            PrefixOperator::Not => !operand,
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixOperator::Not => f.write_str("!"),
        }
    }
}

/// A node of a propositional logic expression tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A propositional variable
    Identifier(String),
    /// A constant, written `1` or `0`
    Boolean(bool),
    /// A unary operator applied to one operand
    Prefix {
        /// The operator
        operator: PrefixOperator,
        /// The operand
        operand: Box<Expression>,
    },
    /// A binary connective
    Infix {
        /// The operator exactly as written
        operator: String,
        /// What the operator means
        action: Action,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
    },
}

impl Expression {
    /// Create a variable reference
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    /// Create a constant
    pub fn boolean(value: bool) -> Self {
        Expression::Boolean(value)
    }

    /// Negate an expression
    pub fn not(operand: Expression) -> Self {
        Expression::Prefix {
            operator: PrefixOperator::Not,
            operand: Box::new(operand),
        }
    }

    /// Join two expressions with the given glyph
    ///
    /// Returns `None` when the glyph has no known [`Action`].
    pub fn infix(operator: &str, left: Expression, right: Expression) -> Option<Self> {
        let action = Action::from_operator(operator)?;
        Some(Expression::Infix {
            operator: operator.to_string(),
            action,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Join two expressions with the canonical glyph of `action`
    pub fn binary(action: Action, left: Expression, right: Expression) -> Self {
        Expression::Infix {
            operator: action.canonical_operator().to_string(),
            action,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The action of an infix node, `None` for every other variant
    pub fn action(&self) -> Option<Action> {
        match self {
            Expression::Infix { action, .. } => Some(*action),
            _ => None,
        }
    }

    /// The operand of a negation, `None` for every other variant
    pub fn negated(&self) -> Option<&Expression> {
        match self {
            Expression::Prefix {
                operator: PrefixOperator::Not,
                operand,
            } => Some(operand),
            _ => None,
        }
    }

    /// Canonical, fully parenthesised text of the expression
    ///
    /// This is the same as the `Display` output. Two expressions with equal literals
    /// are interchangeable for every rewrite rule.
    pub fn literal(&self) -> String {
        self.to_string()
    }
}

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `table <expr>`: print the truth table
    Table(Expression),
    /// `simplify <expr>`: rewrite to a simpler equivalent form
    Simplify(Expression),
}

impl Statement {
    /// The wrapped expression
    pub fn expression(&self) -> &Expression {
        match self {
            Statement::Table(expr) | Statement::Simplify(expr) => expr,
        }
    }

    /// Take ownership of the wrapped expression
    pub fn into_expression(self) -> Expression {
        match self {
            Statement::Table(expr) | Statement::Simplify(expr) => expr,
        }
    }
}
