//! The rewrite rule catalogue
//!
//! Every rule looks at a single node (and, for the chain rules, the `or`-chain rooted
//! at it) and fires at most once. Operand comparisons go through the canonical
//! literal text, so `a | b` and `a + b` count as different operands while `!a` and a
//! freshly built `!a` count as the same.

use crate::expression::{Action, Expression};

fn same(left: &Expression, right: &Expression) -> bool {
    left.literal() == right.literal()
}

fn is_constant(expression: &Expression, value: bool) -> bool {
    *expression == Expression::Boolean(value)
}

/// `a` and `!a`, in either order
fn complementary(left: &Expression, right: &Expression) -> bool {
    left.negated().is_some_and(|inner| same(inner, right))
        || right.negated().is_some_and(|inner| same(inner, left))
}

/// Leaves of the `or`-chain rooted at `expression`, left to right
fn disjuncts(expression: &Expression) -> Vec<&Expression> {
    let mut found = Vec::new();
    collect_disjuncts(expression, &mut found);
    found
}

fn collect_disjuncts<'a>(expression: &'a Expression, found: &mut Vec<&'a Expression>) {
    match expression {
        Expression::Infix {
            action: Action::Or,
            left,
            right,
            ..
        } => {
            collect_disjuncts(left, found);
            collect_disjuncts(right, found);
        }
        other => found.push(other),
    }
}

/// Identity and annihilation with constants
///
/// - `a * 1 = a`, `a * 0 = 0`
/// - `a + 0 = a`, `a + 1 = 1`
pub fn identity(expression: &Expression) -> Option<Expression> {
    let Expression::Infix {
        action, left, right, ..
    } = expression
    else {
        return None;
    };

    // The annihilating constant wins over the neutral one: `1 * 0` is `0`
    let (annihilator, neutral) = match action {
        Action::And => (false, true),
        Action::Or => (true, false),
        _ => return None,
    };

    if is_constant(left, annihilator) || is_constant(right, annihilator) {
        Some(Expression::Boolean(annihilator))
    } else if is_constant(left, neutral) {
        Some((**right).clone())
    } else if is_constant(right, neutral) {
        Some((**left).clone())
    } else {
        None
    }
}

/// `a + a = a`, `a * a = a`
pub fn idempotence(expression: &Expression) -> Option<Expression> {
    match expression {
        Expression::Infix {
            action: Action::Or | Action::And,
            left,
            right,
            ..
        } if same(left, right) => Some((**left).clone()),
        _ => None,
    }
}

/// `a + !a = 1`, also when the two sit anywhere in one `or`-chain
pub fn negated_alternative(expression: &Expression) -> Option<Expression> {
    if expression.action() != Some(Action::Or) {
        return None;
    }

    let terms = disjuncts(expression);
    let found = terms.iter().enumerate().any(|(i, term)| {
        terms[i + 1..]
            .iter()
            .any(|other| complementary(term, other))
    });

    found.then_some(Expression::Boolean(true))
}

/// `a * !a = 0`
pub fn negated_conjunction(expression: &Expression) -> Option<Expression> {
    match expression {
        Expression::Infix {
            action: Action::And,
            left,
            right,
            ..
        } if complementary(left, right) => Some(Expression::Boolean(false)),
        _ => None,
    }
}

/// `a -> b = !a + b`
///
/// Always fires on an implication, which removes implications before the other rules
/// look at the result.
pub fn implication(expression: &Expression) -> Option<Expression> {
    match expression {
        Expression::Infix {
            action: Action::Implication,
            left,
            right,
            ..
        } => Some(Expression::binary(
            Action::Or,
            Expression::not((**left).clone()),
            (**right).clone(),
        )),
        _ => None,
    }
}

/// `!(a * b) = !a + !b`, `!(a + b) = !a * !b`
pub fn de_morgan(expression: &Expression) -> Option<Expression> {
    let Expression::Infix {
        action, left, right, ..
    } = expression.negated()?
    else {
        return None;
    };

    let dual = match action {
        Action::And => Action::Or,
        Action::Or => Action::And,
        _ => return None,
    };

    Some(Expression::binary(
        dual,
        Expression::not((**left).clone()),
        Expression::not((**right).clone()),
    ))
}

/// `!!a = a`
pub fn double_negation(expression: &Expression) -> Option<Expression> {
    expression.negated()?.negated().cloned()
}

/// `a + b + a = a + b`
///
/// Finds the first disjunct of the `or`-chain that repeats an earlier one and drops
/// it; the `or` node that held it collapses into its other side. One duplicate is
/// removed per call.
pub fn duplicate_alternative(expression: &Expression) -> Option<Expression> {
    if expression.action() != Some(Action::Or) {
        return None;
    }

    let terms = disjuncts(expression);
    let duplicate = (1..terms.len())
        .find(|&j| terms[..j].iter().any(|earlier| same(earlier, terms[j])))?;

    let mut index = 0;
    without_disjunct(expression, duplicate, &mut index)
}

/// Copy of the chain with the `target`-th disjunct removed; `None` if the whole
/// subtree was that disjunct
fn without_disjunct(
    expression: &Expression,
    target: usize,
    index: &mut usize,
) -> Option<Expression> {
    match expression {
        Expression::Infix {
            operator,
            action: Action::Or,
            left,
            right,
        } => {
            let left = without_disjunct(left, target, index);
            let right = without_disjunct(right, target, index);
            match (left, right) {
                (Some(left), Some(right)) => Some(Expression::Infix {
                    operator: operator.clone(),
                    action: Action::Or,
                    left: Box::new(left),
                    right: Box::new(right),
                }),
                (Some(side), None) | (None, Some(side)) => Some(side),
                (None, None) => None,
            }
        }
        leaf => {
            let position = *index;
            *index += 1;
            (position != target).then(|| leaf.clone())
        }
    }
}
