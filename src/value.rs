use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;

use crate::error::{PredicateError, Result};

/// A literal constant that can appear inside a predicate.
///
/// Values are compared structurally: two values are equal when they carry
/// the same variant and equal payloads. `Integer(1)` and `Float(1.0)` are
/// therefore different values, even though both render as `1`.
///
/// # Float Equality
///
/// Floats compare by bit pattern, so every value is equal to itself
/// (including `NaN`). This makes `Value` usable as a map key.
///
/// # Examples
///
/// ```
/// use predicate_lang::Value;
///
/// let age = Value::from(18);
/// let name = Value::from("Bob");
/// let tags = Value::from(vec![Value::from("a"), Value::from("b")]);
///
/// assert_eq!(age, Value::Integer(18));
/// assert_eq!(name.to_string(), "\"Bob\"");
/// assert_eq!(tags.to_string(), "{\"a\", \"b\"}");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence of a value (`NULL`)
    Null,

    /// Boolean (`TRUE`/`FALSE`)
    Boolean(bool),

    /// Signed integer
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// Arbitrary-precision decimal
    Decimal(Decimal),

    /// UTF-8 string
    String(String),

    /// Raw bytes
    Data(Vec<u8>),

    /// Ordered collection of values
    Collection(Vec<Value>),
}

impl Value {
    /// Build a `Data` value from raw bytes.
    pub fn data(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Data(bytes.into())
    }

    /// Human-readable name of the variant
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Data(_) => "data",
            Value::Collection(_) => "collection",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Boolean(a), Boolean(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Decimal(a), Decimal(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Data(a), Data(b)) => a == b,
            (Collection(a), Collection(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(n) => n.hash(state),
            Value::Float(n) => n.to_bits().hash(state),
            Value::Decimal(d) => d.hash(state),
            Value::String(s) => s.hash(state),
            Value::Data(bytes) => bytes.hash(state),
            Value::Collection(items) => items.hash(state),
        }
    }
}

// Literal conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! try_from_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Value {
                type Error = PredicateError;

                /// Fails with `UnsupportedLiteral` when `n` does not fit in an i64.
                fn try_from(n: $t) -> Result<Self> {
                    i64::try_from(n).map(Value::Integer).map_err(|_| {
                        PredicateError::UnsupportedLiteral(format!("{} overflows a 64-bit integer", n))
                    })
                }
            }
        )*
    };
}

try_from_integer!(u64, usize, isize, i128, u128);

impl From<f32> for Value {
    /// Widens through the f32's shortest decimal form, so `0.1f32` stays `0.1`.
    fn from(n: f32) -> Self {
        let widened = n.to_string().parse::<f64>().unwrap_or(f64::from(n));
        Value::Float(widened)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Data(bytes.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Collection(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = PredicateError;

    /// Convert a JSON literal. Objects have no predicate form and are rejected.
    fn try_from(v: serde_json::Value) -> Result<Self> {
        match v {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Integer(i)),
                None => n
                    .as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| PredicateError::UnsupportedLiteral(n.to_string())),
            },
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(arr) => arr
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Value::Collection),
            serde_json::Value::Object(_) => Err(PredicateError::UnsupportedLiteral(
                "JSON objects cannot be used as predicate literals".to_string(),
            )),
        }
    }
}
