//! Fixpoint term rewriting for propositional expressions
//!
//! The [`Simplifier`] owns an ordered, immutable list of [`Rule`]s. One *pass* walks
//! the tree bottom-up: both children of a node are rewritten first, then every rule is
//! offered the node exactly once, in list order, each rule seeing what the previous
//! one produced. Passes repeat until the canonical literal text of the whole tree stops
//! changing, which costs one extra confirming pass after the last real rewrite.
//!
//! Rules never mutate their input. A rule either declines (`None`) or returns a fresh
//! node, cloning any subtree it keeps.
//!
//! # Examples
//!
//! ```
//! use proposition::{parse_statement, Simplifier};
//!
//! let simplifier = Simplifier::new();
//! let stmt = parse_statement("simplify !(a * b) + a").unwrap();
//!
//! let simplified = simplifier.simplify(stmt.expression());
//! assert_eq!(simplified.literal(), "1");
//! ```

mod rules;

pub use rules::{
    de_morgan, double_negation, duplicate_alternative, idempotence, identity, implication,
    negated_alternative, negated_conjunction,
};

use crate::expression::Expression;
use std::fmt;

/// Signature shared by all rewrite rules
pub type RuleFn = fn(&Expression) -> Option<Expression>;

/// A named local rewrite
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short name, used in log output
    pub name: &'static str,
    /// The rewrite; `None` means the rule does not apply to this node
    pub apply: RuleFn,
}

impl Rule {
    /// Pair a rewrite function with a name
    pub const fn new(name: &'static str, apply: RuleFn) -> Self {
        Rule { name, apply }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The default rule set, in application order
pub const DEFAULT_RULES: [Rule; 8] = [
    Rule::new("identity", identity),
    Rule::new("idempotence", idempotence),
    Rule::new("negated alternative", negated_alternative),
    Rule::new("negated conjunction", negated_conjunction),
    Rule::new("implication", implication),
    Rule::new("de morgan", de_morgan),
    Rule::new("double negation", double_negation),
    Rule::new("duplicate alternative", duplicate_alternative),
];

/// Rewrites expressions to a fixpoint of its rule list
#[derive(Debug, Clone)]
pub struct Simplifier {
    rules: Vec<Rule>,
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Simplifier {
    /// Engine over [`DEFAULT_RULES`]
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }

    /// Engine over a custom rule list, applied in the given order
    ///
    /// Every rule must make the tree smaller or move it towards some normal form;
    /// a pair of rules that undo each other never reaches a fixpoint.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Simplifier { rules }
    }

    /// The rules, in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rewrite until a full pass leaves the literal text unchanged
    pub fn simplify(&self, expression: &Expression) -> Expression {
        let mut current = expression.clone();
        let mut passes = 0usize;

        loop {
            let previous = current.literal();
            current = self.pass(current);
            passes += 1;
            if current.literal() == previous {
                break;
            }
        }

        log::debug!("simplified {} to {} in {} passes", expression, current, passes);
        current
    }

    /// One bottom-up pass over the whole tree
    fn pass(&self, expression: Expression) -> Expression {
        match expression {
            Expression::Infix {
                operator,
                action,
                left,
                right,
            } => self.apply_rules(Expression::Infix {
                operator,
                action,
                left: Box::new(self.pass(*left)),
                right: Box::new(self.pass(*right)),
            }),
            Expression::Prefix { operator, operand } => self.apply_rules(Expression::Prefix {
                operator,
                operand: Box::new(self.pass(*operand)),
            }),
            leaf @ (Expression::Identifier(_) | Expression::Boolean(_)) => leaf,
        }
    }

    fn apply_rules(&self, mut expression: Expression) -> Expression {
        for rule in &self.rules {
            if let Some(rewritten) = (rule.apply)(&expression) {
                log::trace!("{}: {} => {}", rule.name, expression, rewritten);
                expression = rewritten;
            }
        }
        expression
    }
}

/// Simplify with the default rule set
pub fn simplify(expression: &Expression) -> Expression {
    Simplifier::new().simplify(expression)
}
