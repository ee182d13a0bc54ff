// tests/builder_tests.rs

use predicate_lang::ast::{Comparison, Expression, Operator, Predicate};
use predicate_lang::builder::{self, compare, expr};
use predicate_lang::Value;

fn manual(key: &str, op: Operator, value: impl Into<Value>) -> Predicate {
    Predicate::Comparison(Comparison::new(
        Expression::key_path(key),
        Expression::Literal(value.into()),
        op,
    ))
}

// ============================================================================
// Key path + literal helpers
// ============================================================================

#[test]
fn test_each_helper_uses_its_own_operator() {
    assert_eq!(builder::lt("age", 18), manual("age", Operator::LessThan, 18));
    assert_eq!(builder::le("age", 18), manual("age", Operator::LessThanOrEqualTo, 18));
    assert_eq!(builder::gt("age", 18), manual("age", Operator::GreaterThan, 18));
    assert_eq!(builder::ge("age", 18), manual("age", Operator::GreaterThanOrEqualTo, 18));
    assert_eq!(builder::eq("age", 18), manual("age", Operator::EqualTo, 18));
    assert_eq!(builder::ne("age", 18), manual("age", Operator::NotEqualTo, 18));
}

#[test]
fn test_helper_rendering() {
    assert_eq!(builder::lt("age", 18).to_string(), "age < 18");
    assert_eq!(builder::le("age", 18).to_string(), "age <= 18");
    assert_eq!(builder::gt("age", 18).to_string(), "age > 18");
    assert_eq!(builder::ge("age", 18).to_string(), "age >= 18");
    assert_eq!(builder::eq("name", "Bob").to_string(), "name = \"Bob\"");
    assert_eq!(builder::ne("deleted", true).to_string(), "deleted != TRUE");
}

#[test]
fn test_helpers_accept_literal_conversions() {
    assert_eq!(builder::eq("score", 2.5).to_string(), "score = 2.5");
    assert_eq!(builder::eq("parent", None::<i64>).to_string(), "parent = NULL");
    assert_eq!(
        builder::eq("ids", vec![Value::from(1), Value::from(2)]).to_string(),
        "ids = {1, 2}"
    );
    assert_eq!(builder::eq("x", 0.1f32).to_string(), "x = 0.1");
    assert_eq!(
        builder::eq("count", Value::try_from(vec![1, 2].len()).unwrap()).to_string(),
        "count = 2"
    );
    assert_eq!(builder::eq(String::from("owner"), String::from("me")).to_string(), "owner = \"me\"");
}

// ============================================================================
// Expression helpers
// ============================================================================

#[test]
fn test_expression_helpers() {
    let start = || Expression::key_path("start");
    let end = || Expression::key_path("end");

    assert_eq!(expr::lt(start(), end()).to_string(), "start < end");
    assert_eq!(expr::le(start(), end()).to_string(), "start <= end");
    assert_eq!(expr::gt(start(), end()).to_string(), "start > end");
    assert_eq!(expr::ge(start(), end()).to_string(), "start >= end");
    assert_eq!(expr::eq(start(), end()).to_string(), "start = end");
    assert_eq!(expr::ne(start(), end()).to_string(), "start != end");
}

#[test]
fn test_expression_helpers_match_key_helpers() {
    let by_expr = expr::gt(Expression::key_path("age"), Expression::literal(21));
    assert_eq!(by_expr, builder::gt("age", 21));
}

#[test]
fn test_compare_with_word_operator() {
    let p = compare(
        Expression::key_path("name"),
        Operator::Like,
        Expression::literal("J*n"),
    );
    assert_eq!(p.to_string(), "name LIKE \"J*n\"");
}

// ============================================================================
// Combinators
// ============================================================================

#[test]
fn test_combinators_match_manual_construction() {
    let built = builder::and([builder::eq("a", 1), builder::eq("b", 2)]).unwrap();
    let expected = Predicate::Compound {
        op: predicate_lang::BoolOp::And,
        children: vec![manual("a", Operator::EqualTo, 1), manual("b", Operator::EqualTo, 2)],
    };
    assert_eq!(built, expected);

    assert_eq!(builder::not(builder::eq("a", 1)), Predicate::Not(Box::new(builder::eq("a", 1))));
}

#[test]
fn test_combinators_leave_inputs_untouched() {
    let a = builder::eq("a", 1);
    let combined = builder::or([a.clone(), builder::eq("b", 2)]).unwrap();
    assert_eq!(a.to_string(), "a = 1");
    assert_eq!(combined.to_string(), "a = 1 OR b = 2");
}
