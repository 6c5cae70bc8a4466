//! Evaluation of expressions against a variable assignment

use super::Expression;
use std::collections::HashMap;

/// Evaluate `expr` under `assignment`
///
/// Free-function form of [`Expression::evaluate`].
pub fn evaluate(assignment: &HashMap<String, bool>, expr: &Expression) -> bool {
    expr.evaluate(assignment)
}

impl Expression {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Variables missing from the assignment read as `false`. Binary nodes are
    /// interpreted through their [`Action`](super::Action), never through the glyph.
    ///
    /// # Examples
    ///
    /// ```
    /// use proposition::parse_statement;
    /// use std::collections::HashMap;
    ///
    /// let stmt = parse_statement("table a -> b").unwrap();
    /// let expr = stmt.expression();
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert("a".to_string(), true);
    /// assert!(!expr.evaluate(&assignment));
    ///
    /// assignment.insert("b".to_string(), true);
    /// assert!(expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<String, bool>) -> bool {
        match self {
            Expression::Identifier(name) => assignment.get(name).copied().unwrap_or(false),
            Expression::Boolean(value) => *value,
            Expression::Prefix { operator, operand } => {
                operator.apply(operand.evaluate(assignment))
            }
            Expression::Infix {
                action,
                left,
                right,
                ..
            } => action.apply(left.evaluate(assignment), right.evaluate(assignment)),
        }
    }

    /// Free identifiers in first-occurrence order, without duplicates
    ///
    /// The walk is pre-order and visits left operands before right ones, which fixes
    /// the column order of a truth table.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut found = Vec::new();
        self.collect_identifiers(&mut found);
        found
    }

    fn collect_identifiers<'a>(&'a self, found: &mut Vec<&'a str>) {
        match self {
            Expression::Identifier(name) => {
                if !found.contains(&name.as_str()) {
                    found.push(name.as_str());
                }
            }
            Expression::Boolean(_) => {}
            Expression::Prefix { operand, .. } => operand.collect_identifiers(found),
            Expression::Infix { left, right, .. } => {
                left.collect_identifiers(found);
                right.collect_identifiers(found);
            }
        }
    }
}
