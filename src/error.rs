//! Construction-time errors.
//!
//! Every failure in this crate happens while a tree is being assembled
//! (an unknown token, an empty compound, a literal with no predicate
//! form). A tree that was built successfully always renders.

use thiserror::Error;

use crate::ast::BoolOp;

/// Errors raised while constructing predicate nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// Option token outside `[c]`, `[d]`, `[n]`, `[l]`
    #[error("Invalid option: '{0}' (expected one of [c], [d], [n], [l])")]
    InvalidOption(String),

    /// Operator token outside the closed operator set
    #[error("Invalid operator: '{0}'")]
    InvalidOperator(String),

    /// Modifier token other than `ANY` or `ALL`
    #[error("Invalid modifier: '{0}' (expected ANY or ALL)")]
    InvalidModifier(String),

    /// AND/OR compound built with no children
    #[error("Empty compound: {0} requires at least one predicate")]
    EmptyCompound(BoolOp),

    /// Literal with no predicate representation (e.g. a JSON object)
    #[error("Unsupported literal: {0}")]
    UnsupportedLiteral(String),
}

pub type Result<T> = std::result::Result<T, PredicateError>;
