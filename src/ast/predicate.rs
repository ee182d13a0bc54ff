use crate::ast::{BoolOp, Comparison, Expression};
use crate::error::{PredicateError, Result};

/// Boolean-valued predicate tree.
///
/// Each node owns its children. Nodes are never modified once built;
/// combining predicates always produces a new node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Comparison leaf
    ///
    /// # Example
    /// ```text
    /// age >= 18
    /// ```
    Comparison(Comparison),

    /// AND/OR over an ordered, non-empty list of predicates
    ///
    /// Child order is significant for both equality and rendering.
    ///
    /// # Example
    /// ```text
    /// name = "Bob" AND age > 21
    /// ```
    Compound {
        op: BoolOp,
        children: Vec<Predicate>,
    },

    /// Negation
    ///
    /// # Example
    /// ```text
    /// NOT isActive
    /// ```
    Not(Box<Predicate>),

    /// Boolean-valued expression used directly as a predicate
    ///
    /// # Example
    /// ```text
    /// isActive
    /// ```
    Expression(Expression),
}

impl Predicate {
    /// Predicate that holds when the boolean field at `path` is true.
    pub fn key_path(path: impl Into<String>) -> Self {
        Predicate::Expression(Expression::key_path(path))
    }

    /// Combine `children` under `op`.
    ///
    /// Fails with [`PredicateError::EmptyCompound`] when `children` is empty.
    pub fn compound(op: BoolOp, children: impl IntoIterator<Item = Predicate>) -> Result<Self> {
        let children: Vec<_> = children.into_iter().collect();
        if children.is_empty() {
            tracing::debug!(op = op.token(), "rejected empty compound");
            return Err(PredicateError::EmptyCompound(op));
        }
        Ok(Predicate::Compound { op, children })
    }

    /// `self AND other` as a new two-child node.
    pub fn and(self, other: Predicate) -> Self {
        Predicate::Compound {
            op: BoolOp::And,
            children: vec![self, other],
        }
    }

    /// `self OR other` as a new two-child node.
    pub fn or(self, other: Predicate) -> Self {
        Predicate::Compound {
            op: BoolOp::Or,
            children: vec![self, other],
        }
    }

    pub fn negate(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// Height of the tree; leaves have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Predicate::Comparison(_) | Predicate::Expression(_) => 1,
            Predicate::Not(inner) => 1 + inner.depth(),
            Predicate::Compound { children, .. } => {
                1 + children.iter().map(Predicate::depth).max().unwrap_or(0)
            }
        }
    }

    /// All comparison leaves, left to right.
    pub fn comparisons(&self) -> Vec<&Comparison> {
        let mut found = Vec::new();
        self.collect_comparisons(&mut found);
        found
    }

    fn collect_comparisons<'a>(&'a self, found: &mut Vec<&'a Comparison>) {
        match self {
            Predicate::Comparison(c) => found.push(c),
            Predicate::Expression(_) => {}
            Predicate::Not(inner) => inner.collect_comparisons(found),
            Predicate::Compound { children, .. } => {
                for child in children {
                    child.collect_comparisons(found);
                }
            }
        }
    }
}

impl From<Comparison> for Predicate {
    fn from(comparison: Comparison) -> Self {
        Predicate::Comparison(comparison)
    }
}
