//! Build and render a single comparison

use crate::ast::{Comparison, ComparisonOption, Expression, Modifier, Operator, Options};
use crate::{to_query, Predicate};

use super::{parse_literal, CliError};

/// Options for the compare command
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Left-hand key path
    pub key_path: String,
    /// Operator token (`>=`, `BEGINSWITH`, ...)
    pub operator: String,
    /// Right-hand literal, or key path when `right_is_key_path` is set
    pub value: Option<String>,
    /// Treat `value` as a key path rather than a literal
    pub right_is_key_path: bool,
    /// Modifier token (`ANY`/`ALL`)
    pub modifier: Option<String>,
    /// Option tokens (`[c]`, `c`, or a concatenated suffix such as `[c][d]`)
    pub options: Vec<String>,
    /// Wrap the comparison in NOT
    pub negate: bool,
}

/// Build the comparison described by `options` and return its canonical form
pub fn execute_compare(options: &CompareOptions) -> Result<String, CliError> {
    let operator: Operator = options.operator.parse()?;
    let raw = options.value.as_deref().ok_or(CliError::NoInput)?;

    let right = if options.right_is_key_path {
        Expression::key_path(raw.trim())
    } else {
        Expression::Literal(parse_literal(raw)?)
    };

    let mut comparison = Comparison::new(Expression::key_path(&options.key_path), right, operator);

    if let Some(token) = &options.modifier {
        comparison = comparison.with_modifier(token.parse::<Modifier>()?);
    }

    for token in &options.options {
        let parsed: Vec<ComparisonOption> = if token.starts_with('[') {
            Options::parse(token)?.canonical()
        } else {
            vec![token.parse()?]
        };
        comparison = comparison.with_options(parsed);
    }

    tracing::debug!(?comparison, "built comparison");
    let predicate = Predicate::Comparison(comparison);
    let predicate = if options.negate { predicate.negate() } else { predicate };
    Ok(to_query(&predicate))
}
