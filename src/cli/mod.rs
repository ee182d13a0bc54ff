//! CLI support for predicate-lang
//!
//! Provides programmatic access to the `predicate` command so other tools
//! can build and render predicates the same way.

mod compare;
mod convert;
mod docs;

pub use compare::{execute_compare, CompareOptions};
pub use convert::parse_literal;
pub use docs::get_token_reference;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid predicate: {0}")]
    Predicate(#[from] crate::PredicateError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No value provided. Pass VALUE or pipe it to stdin.")]
    NoInput,
}
