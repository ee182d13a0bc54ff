use crate::value::Value;

/// Operand of a comparison.
///
/// Key paths are opaque field references. They are stored and rendered
/// verbatim; resolving them against a record is left to an evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Constant value
    ///
    /// # Example
    /// ```text
    /// 18
    /// "Bob"
    /// {1, 2, 3}
    /// ```
    Literal(Value),

    /// Field reference
    ///
    /// # Example
    /// ```text
    /// age
    /// address.city
    /// ```
    KeyPath(String),
}

impl Expression {
    pub fn key_path(path: impl Into<String>) -> Self {
        Expression::KeyPath(path.into())
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    pub fn as_key_path(&self) -> Option<&str> {
        match self {
            Expression::KeyPath(path) => Some(path),
            Expression::Literal(_) => None,
        }
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Literal(value)
    }
}
