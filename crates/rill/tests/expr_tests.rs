//! Expression evaluator tests

use rill::*;

// Build a left-leaning chain: ((...(0 + 1) + 2) + ...) + depth
fn left_chain(depth: usize) -> Expr {
    let mut expr = Expr::literal(0);
    for i in 1..=depth {
        expr = Expr::sum(expr, Expr::literal(i as i64));
    }
    expr
}

// ═══════════════════════════════════════════════════════════════════════
// Evaluation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_evaluate_literal() {
    assert_eq!(Expr::literal(42).evaluate().unwrap(), 42);
    assert_eq!(Expr::literal(0).evaluate().unwrap(), 0);
    assert_eq!(Expr::literal(-7).evaluate().unwrap(), -7);
}

#[test]
fn test_evaluate_nested_sum() {
    // 1 + (2 + 3)
    let tree = Expr::sum(
        Expr::literal(1),
        Expr::sum(Expr::literal(2), Expr::literal(3)),
    );
    assert_eq!(tree.evaluate().unwrap(), 6);
}

#[test]
fn test_evaluate_is_grouping_invariant() {
    // Same leaves, three shapes, one result
    let left_leaning = Expr::sum(
        Expr::sum(Expr::sum(Expr::literal(4), Expr::literal(5)), Expr::literal(6)),
        Expr::literal(7),
    );
    let right_leaning = Expr::sum(
        Expr::literal(4),
        Expr::sum(Expr::literal(5), Expr::sum(Expr::literal(6), Expr::literal(7))),
    );
    let balanced = Expr::sum(
        Expr::sum(Expr::literal(4), Expr::literal(5)),
        Expr::sum(Expr::literal(6), Expr::literal(7)),
    );

    assert_eq!(left_leaning.evaluate().unwrap(), 22);
    assert_eq!(right_leaning.evaluate().unwrap(), 22);
    assert_eq!(balanced.evaluate().unwrap(), 22);
}

#[test]
fn test_evaluate_negative_values() {
    let tree = Expr::sum(Expr::literal(-10), Expr::sum(Expr::literal(3), Expr::literal(-2)));
    assert_eq!(tree.evaluate().unwrap(), -9);
}

#[test]
fn test_evaluate_is_pure_and_repeatable() {
    let tree = Expr::sum(Expr::literal(20), Expr::literal(22));
    assert_eq!(tree.evaluate().unwrap(), 42);
    assert_eq!(tree.evaluate().unwrap(), 42);
    // The tree itself is untouched
    assert_eq!(tree, Expr::sum(Expr::literal(20), Expr::literal(22)));
}

#[test]
fn test_evaluate_deep_chain_within_default_limit() {
    let tree = left_chain(500);
    assert_eq!(tree.evaluate().unwrap(), 125_250); // 0 + 1 + ... + 500
}

#[test]
fn test_expr_from_i64() {
    let expr: Expr = 7.into();
    assert_eq!(expr, Expr::Literal(7));
    assert_eq!(expr.evaluate().unwrap(), 7);
}

// ═══════════════════════════════════════════════════════════════════════
// Error Paths
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_depth_limit_exceeded() {
    let ctx = EvalContext::with_max_depth(4);

    let err = left_chain(4).evaluate_in(&ctx).unwrap_err();
    assert!(matches!(err, EvalError::DepthExceeded { limit: 4 }));

    // A shallower tree under the same context is fine
    assert_eq!(left_chain(3).evaluate_in(&ctx).unwrap(), 6);
}

#[test]
fn test_depth_limit_applies_to_traced_evaluation() {
    let ctx = EvalContext::with_max_depth(2);
    let err = left_chain(5).evaluate_with_trace_in(&ctx).unwrap_err();
    assert!(matches!(err, EvalError::DepthExceeded { limit: 2 }));
}

#[test]
fn test_integer_overflow_is_a_typed_error() {
    let tree = Expr::sum(Expr::literal(i64::MAX), Expr::literal(1));
    let err = tree.evaluate().unwrap_err();
    assert!(matches!(
        err,
        EvalError::IntegerOverflow { left, right } if left == i64::MAX && right == 1
    ));
}

#[test]
fn test_error_messages() {
    let err = left_chain(10)
        .evaluate_in(&EvalContext::with_max_depth(3))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "expression nesting exceeds the depth limit of 3"
    );

    let err = Expr::sum(Expr::literal(i64::MAX), Expr::literal(2))
        .evaluate()
        .unwrap_err();
    assert!(err.to_string().contains("integer overflow"));
}

// ═══════════════════════════════════════════════════════════════════════
// Tracing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_trace_result_matches_plain_evaluation() {
    let tree = left_chain(20);
    let (traced, _) = tree.evaluate_with_trace().unwrap();
    assert_eq!(traced, tree.evaluate().unwrap());
}

#[test]
fn test_trace_emits_children_before_parent() {
    // 1 + (2 + 3)
    let tree = Expr::sum(
        Expr::literal(1),
        Expr::sum(Expr::literal(2), Expr::literal(3)),
    );
    let (result, events) = tree.evaluate_with_trace().unwrap();

    assert_eq!(result, 6);
    assert_eq!(
        events,
        vec![
            TraceEvent::Literal { value: 1 },
            TraceEvent::Literal { value: 2 },
            TraceEvent::Literal { value: 3 },
            TraceEvent::Sum {
                left: 2,
                right: 3,
                total: 5
            },
            TraceEvent::Sum {
                left: 1,
                right: 5,
                total: 6
            },
        ]
    );
}

#[test]
fn test_trace_emits_one_record_per_node() {
    // left_chain(n) has n sum nodes and n + 1 literals
    let n = 12;
    let (_, events) = left_chain(n).evaluate_with_trace().unwrap();
    assert_eq!(events.len(), 2 * n + 1);

    let literals = events
        .iter()
        .filter(|e| matches!(e, TraceEvent::Literal { .. }))
        .count();
    assert_eq!(literals, n + 1);
}

#[test]
fn test_trace_sum_records_are_consistent() {
    let (_, events) = left_chain(8).evaluate_with_trace().unwrap();
    for event in &events {
        if let TraceEvent::Sum { left, right, total } = event {
            assert_eq!(left + right, *total);
        }
    }
}

#[test]
fn test_trace_event_display() {
    let tree = Expr::sum(Expr::literal(2), Expr::literal(3));
    let (_, events) = tree.evaluate_with_trace().unwrap();
    let rendered: Vec<String> = events.iter().map(|e| e.to_string()).collect();
    assert_eq!(rendered, vec!["num: 2", "num: 3", "sum: 2 + 3"]);
}
