//! Property tests for the simplification engine
//!
//! Random expressions over `a`, `b` and `c` using every connective glyph.

use proposition::{evaluate, Expression, Simplifier};
use proptest::prelude::*;
use std::collections::HashMap;

const VARIABLES: [&str; 3] = ["a", "b", "c"];

fn expression() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        prop::sample::select(VARIABLES.to_vec()).prop_map(Expression::identifier),
        any::<bool>().prop_map(Expression::boolean),
    ];

    leaf.prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expression::not),
            (
                inner.clone(),
                prop::sample::select(vec!["+", "|", "*", "&", "->", "<->"]),
                inner,
            )
                .prop_map(|(left, op, right)| Expression::infix(op, left, right).unwrap()),
        ]
    })
}

/// All eight assignments of the three variables
fn assignments() -> Vec<HashMap<String, bool>> {
    (0..8u8)
        .map(|bits| {
            VARIABLES
                .iter()
                .enumerate()
                .map(|(i, name)| (name.to_string(), bits & (1 << i) != 0))
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_simplify_reaches_a_fixpoint(expr in expression()) {
        let simplifier = Simplifier::new();
        let once = simplifier.simplify(&expr);
        let twice = simplifier.simplify(&once);
        prop_assert_eq!(once.literal(), twice.literal());
    }

    #[test]
    fn prop_simplify_preserves_meaning(expr in expression()) {
        let simplified = Simplifier::new().simplify(&expr);
        for assignment in assignments() {
            prop_assert_eq!(
                evaluate(&assignment, &expr),
                evaluate(&assignment, &simplified),
                "{} vs {} under {:?}", expr, simplified, assignment
            );
        }
    }

    #[test]
    fn prop_simplify_never_adds_variables(expr in expression()) {
        let simplified = Simplifier::new().simplify(&expr);
        let before = expr.identifiers();
        for name in simplified.identifiers() {
            prop_assert!(before.contains(&name), "{} appeared in {}", name, simplified);
        }
    }

    #[test]
    fn prop_literal_reparses_to_same_tree(expr in expression()) {
        let text = format!("table {}", expr.literal());
        let reparsed = proposition::parse_statement(&text).unwrap().into_expression();
        prop_assert_eq!(reparsed, expr);
    }
}
