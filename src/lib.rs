pub mod ast;
pub mod builder;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod output;
pub mod value;

pub use ast::{BoolOp, Comparison, ComparisonOption, Expression, Modifier, Operator, Options, Predicate};
pub use error::{PredicateError, Result};
pub use output::to_query;
pub use value::Value;
