// tests/predicate_tests.rs

use predicate_lang::ast::{BoolOp, Comparison, Expression, Operator, Predicate};
use predicate_lang::builder::{and, eq, gt, lt, not, or};
use predicate_lang::{to_query, PredicateError};
use std::sync::Arc;
use std::thread;

fn leaf(name: &str) -> Predicate {
    Predicate::key_path(name)
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_key_path_shortcut() {
    let p = Predicate::key_path("isActive");
    assert_eq!(to_query(&p), "isActive");
    assert_eq!(p, Predicate::Expression(Expression::KeyPath("isActive".into())));
}

#[test]
fn test_comparison_leaf() {
    let c = Comparison::new(
        Expression::key_path("age"),
        Expression::literal(18),
        Operator::GreaterThanOrEqualTo,
    );
    let p = Predicate::from(c.clone());
    assert_eq!(p.to_string(), c.to_string());
    assert_eq!(p.to_string(), "age >= 18");
}

// ============================================================================
// Compounds
// ============================================================================

#[test]
fn test_and_of_leaves() {
    let p = and([eq("name", "Bob"), gt("age", 21)]).unwrap();
    assert_eq!(p.to_string(), "name = \"Bob\" AND age > 21");
}

#[test]
fn test_and_joins_rendered_children() {
    let a = eq("name", "Bob");
    let b = gt("age", 21);
    let expected = format!("{} AND {}", a, b);
    assert_eq!(and([a, b]).unwrap().to_string(), expected);
}

#[test]
fn test_or_of_and_is_grouped() {
    let inner = and([leaf("A"), leaf("B")]).unwrap();
    let p = or([inner, leaf("C")]).unwrap();
    assert_eq!(p.to_string(), "(A AND B) OR C");
}

#[test]
fn test_and_of_or_is_grouped() {
    let inner = or([leaf("A"), leaf("B")]).unwrap();
    let p = and([leaf("C"), inner]).unwrap();
    assert_eq!(p.to_string(), "C AND (A OR B)");
}

#[test]
fn test_nested_same_operator_keeps_structure() {
    let nested = and([and([leaf("A"), leaf("B")]).unwrap(), leaf("C")]).unwrap();
    let flat = and([leaf("A"), leaf("B"), leaf("C")]).unwrap();
    assert_eq!(nested.to_string(), "(A AND B) AND C");
    assert_eq!(flat.to_string(), "A AND B AND C");
    assert_ne!(nested, flat);
}

#[test]
fn test_single_child_compound() {
    let p = or([gt("age", 1)]).unwrap();
    assert_eq!(p.to_string(), "age > 1");
}

#[test]
fn test_nested_single_child_compound_is_grouped() {
    let p = or([and([eq("a", 1)]).unwrap(), eq("b", 2)]).unwrap();
    assert_eq!(p.to_string(), "(a = 1) OR b = 2");
}

#[test]
fn test_empty_compound_rejected() {
    let err = and(Vec::<Predicate>::new()).unwrap_err();
    assert_eq!(err, PredicateError::EmptyCompound(BoolOp::And));

    let err = Predicate::compound(BoolOp::Or, std::iter::empty::<Predicate>()).unwrap_err();
    assert_eq!(err, PredicateError::EmptyCompound(BoolOp::Or));
    assert_eq!(err.to_string(), "Empty compound: OR requires at least one predicate");
}

#[test]
fn test_method_combinators() {
    let p = gt("age", 21).and(eq("name", "Bob")).or(leaf("isAdmin"));
    assert_eq!(p.to_string(), "(age > 21 AND name = \"Bob\") OR isAdmin");
}

// ============================================================================
// Negation
// ============================================================================

#[test]
fn test_not_of_leaf() {
    assert_eq!(not(leaf("isActive")).to_string(), "NOT isActive");
    assert_eq!(not(lt("age", 18)).to_string(), "NOT age < 18");
}

#[test]
fn test_not_of_compound_is_grouped() {
    let p = not(or([eq("a", 1), eq("b", 2)]).unwrap());
    assert_eq!(p.to_string(), "NOT (a = 1 OR b = 2)");
}

#[test]
fn test_not_inside_compound_is_not_grouped() {
    let p = and([not(leaf("A")), leaf("B")]).unwrap();
    assert_eq!(p.to_string(), "NOT A AND B");
}

#[test]
fn test_double_negation() {
    assert_eq!(not(not(leaf("A"))).to_string(), "NOT NOT A");
    assert_eq!(leaf("A").negate(), not(leaf("A")));
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equality_is_structural() {
    let a = and([eq("name", "Bob"), gt("age", 21)]).unwrap();
    let b = and([eq("name", "Bob"), gt("age", 21)]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_child_order_matters() {
    let ab = and([leaf("A"), leaf("B")]).unwrap();
    let ba = and([leaf("B"), leaf("A")]).unwrap();
    assert_ne!(ab, ba);
    assert_ne!(ab.to_string(), ba.to_string());
}

#[test]
fn test_bool_operator_matters() {
    let a = and([leaf("A"), leaf("B")]).unwrap();
    let o = or([leaf("A"), leaf("B")]).unwrap();
    assert_ne!(a, o);
}

#[test]
fn test_variants_never_equal_across_kinds() {
    assert_ne!(leaf("A"), not(leaf("A")));
    assert_ne!(leaf("A"), or([leaf("A")]).unwrap());
    assert_ne!(
        Predicate::Expression(Expression::literal(true)),
        Predicate::key_path("true")
    );
}

// ============================================================================
// Inspection and sharing
// ============================================================================

#[test]
fn test_depth_and_comparisons() {
    let p = or([and([eq("a", 1), leaf("b")]).unwrap(), not(gt("c", 2))]).unwrap();
    assert_eq!(p.depth(), 3);

    let found: Vec<String> = p.comparisons().iter().map(|c| c.to_string()).collect();
    assert_eq!(found, vec!["a = 1", "c > 2"]);
}

#[test]
fn test_rendering_is_stable() {
    let p = or([and([eq("a", 1), leaf("b")]).unwrap(), not(gt("c", 2))]).unwrap();
    let first = p.to_string();
    assert_eq!(first, "(a = 1 AND b) OR NOT c > 2");
    for _ in 0..5 {
        assert_eq!(p.to_string(), first);
    }
}

#[test]
fn test_shared_across_threads() {
    let p = Arc::new(and([eq("name", "Bob"), gt("age", 21)]).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = Arc::clone(&p);
            thread::spawn(move || p.to_string())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "name = \"Bob\" AND age > 21");
    }
}
