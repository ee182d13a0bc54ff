//! Named constructors for building predicates.
//!
//! The top-level functions compare a key path against a literal:
//!
//! ```
//! use predicate_lang::builder::{ge, not, or};
//! use predicate_lang::Predicate;
//!
//! let adult = ge("age", 18);
//! let query = or([adult, Predicate::key_path("isGuardian")]).unwrap();
//! assert_eq!(not(query).to_string(), "NOT (age >= 18 OR isGuardian)");
//! ```
//!
//! [`expr`] holds the same functions over two arbitrary expressions.
//! Every helper returns exactly what manual construction would.

use crate::ast::{BoolOp, Comparison, Expression, Operator, Predicate};
use crate::error::Result;
use crate::value::Value;

/// Comparison of two expressions with `operator`, wrapped as a predicate.
pub fn compare(left: Expression, operator: Operator, right: Expression) -> Predicate {
    Predicate::Comparison(Comparison::new(left, right, operator))
}

fn key_compare(key_path: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Predicate {
    compare(
        Expression::key_path(key_path),
        operator,
        Expression::Literal(value.into()),
    )
}

/// `key_path < value`
pub fn lt(key_path: impl Into<String>, value: impl Into<Value>) -> Predicate {
    key_compare(key_path, Operator::LessThan, value)
}

/// `key_path <= value`
pub fn le(key_path: impl Into<String>, value: impl Into<Value>) -> Predicate {
    key_compare(key_path, Operator::LessThanOrEqualTo, value)
}

/// `key_path > value`
pub fn gt(key_path: impl Into<String>, value: impl Into<Value>) -> Predicate {
    key_compare(key_path, Operator::GreaterThan, value)
}

/// `key_path >= value`
pub fn ge(key_path: impl Into<String>, value: impl Into<Value>) -> Predicate {
    key_compare(key_path, Operator::GreaterThanOrEqualTo, value)
}

/// `key_path = value`
pub fn eq(key_path: impl Into<String>, value: impl Into<Value>) -> Predicate {
    key_compare(key_path, Operator::EqualTo, value)
}

/// `key_path != value`
pub fn ne(key_path: impl Into<String>, value: impl Into<Value>) -> Predicate {
    key_compare(key_path, Operator::NotEqualTo, value)
}

/// AND over `predicates`, in order. Fails when `predicates` is empty.
pub fn and(predicates: impl IntoIterator<Item = Predicate>) -> Result<Predicate> {
    Predicate::compound(BoolOp::And, predicates)
}

/// OR over `predicates`, in order. Fails when `predicates` is empty.
pub fn or(predicates: impl IntoIterator<Item = Predicate>) -> Result<Predicate> {
    Predicate::compound(BoolOp::Or, predicates)
}

pub fn not(predicate: Predicate) -> Predicate {
    predicate.negate()
}

/// Comparisons between two arbitrary expressions.
pub mod expr {
    use super::compare;
    use crate::ast::{Expression, Operator, Predicate};

    pub fn lt(left: Expression, right: Expression) -> Predicate {
        compare(left, Operator::LessThan, right)
    }

    pub fn le(left: Expression, right: Expression) -> Predicate {
        compare(left, Operator::LessThanOrEqualTo, right)
    }

    pub fn gt(left: Expression, right: Expression) -> Predicate {
        compare(left, Operator::GreaterThan, right)
    }

    pub fn ge(left: Expression, right: Expression) -> Predicate {
        compare(left, Operator::GreaterThanOrEqualTo, right)
    }

    pub fn eq(left: Expression, right: Expression) -> Predicate {
        compare(left, Operator::EqualTo, right)
    }

    pub fn ne(left: Expression, right: Expression) -> Predicate {
        compare(left, Operator::NotEqualTo, right)
    }
}
