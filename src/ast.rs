//! # Predicate Abstract Syntax Tree
//!
//! This module defines the tree used to describe query filters such as
//! `age >= 18 AND name BEGINSWITH[c] "a"`.
//!
//! ## Architecture Overview
//!
//! - **[expressions]** - Operands: literal values and key paths
//! - **[operators]** - Operator, modifier, option and boolean tokens
//! - **[comparison]** - A relation between two expressions
//! - **[predicate]** - The recursive predicate tree
//!
//! Trees are built bottom-up (`Value` → `Expression` → `Comparison` →
//! `Predicate`) and rendered top-down by [`crate::output`].
//!
//! ## Canonical Form
//!
//! ```text
//! predicate  := comparison | keypath | "(" predicate ")" bool_op predicate | "NOT" predicate
//! comparison := [modifier " "] expr operator options expr
//! options    := ("[c]" | "[d]" | "[l]" | "[n]")*
//! ```
//!
//! Option sets compare as sets and always render in ascending token order,
//! so `{[n], [c]}` and `{[c], [n]}` produce the same text. Compound children
//! keep their order: `A AND B` and `B AND A` are different trees.
//!
//! ## Examples
//!
//! ```text
//! age >= 18
//! ANY tags =[c] "rust"
//! (age > 21 AND name = "Bob") OR isAdmin
//! NOT (a = 1 OR b = 2)
//! ```
pub mod comparison;
pub mod expressions;
pub mod operators;
pub mod predicate;

pub use comparison::{Comparison, Options};
pub use expressions::Expression;
pub use operators::{BoolOp, ComparisonOption, Modifier, Operator};
pub use predicate::Predicate;
