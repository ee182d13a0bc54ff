use std::collections::HashSet;

use crate::ast::{ComparisonOption, Expression, Modifier, Operator};
use crate::error::Result;

/// Set of option flags attached to a comparison.
///
/// Equality is set equality: insertion order is never recorded. The
/// rendering order is derived on demand by [`Options::canonical`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(HashSet<ComparisonOption>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, option: ComparisonOption) -> bool {
        self.0.contains(&option)
    }

    /// Options in ascending token order.
    pub fn canonical(&self) -> Vec<ComparisonOption> {
        let mut sorted: Vec<_> = self.0.iter().copied().collect();
        sorted.sort_by_key(|opt| opt.token());
        sorted
    }

    /// Parse a concatenated suffix such as `[c][n]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use predicate_lang::ast::{ComparisonOption, Options};
    ///
    /// let options = Options::parse("[n][c]").unwrap();
    /// assert_eq!(
    ///     options.canonical(),
    ///     vec![ComparisonOption::CaseInsensitive, ComparisonOption::Normalized]
    /// );
    /// assert!(Options::parse("[x]").is_err());
    /// ```
    pub fn parse(suffix: &str) -> Result<Self> {
        let mut options = Options::new();
        let mut rest = suffix.trim();
        while !rest.is_empty() {
            let end = rest.find(']').map_or(rest.len(), |i| i + 1);
            let (token, tail) = rest.split_at(end);
            options.0.insert(token.parse()?);
            rest = tail;
        }
        Ok(options)
    }
}

impl FromIterator<ComparisonOption> for Options {
    fn from_iter<I: IntoIterator<Item = ComparisonOption>>(iter: I) -> Self {
        Options(iter.into_iter().collect())
    }
}

impl Extend<ComparisonOption> for Options {
    fn extend<I: IntoIterator<Item = ComparisonOption>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Binary relation between two expressions.
///
/// # Examples
///
/// ```
/// use predicate_lang::ast::{Comparison, ComparisonOption, Expression, Modifier, Operator};
///
/// let comparison = Comparison::new(
///     Expression::key_path("age"),
///     Expression::literal(18),
///     Operator::EqualTo,
/// )
/// .with_modifier(Modifier::Any)
/// .with_option(ComparisonOption::Normalized)
/// .with_option(ComparisonOption::CaseInsensitive);
///
/// assert_eq!(comparison.to_string(), "ANY age =[c][n] 18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: Expression,
    pub right: Expression,
    pub operator: Operator,
    pub modifier: Option<Modifier>,
    pub options: Options,
}

impl Comparison {
    pub fn new(left: Expression, right: Expression, operator: Operator) -> Self {
        Comparison {
            left,
            right,
            operator,
            modifier: None,
            options: Options::new(),
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn with_option(mut self, option: ComparisonOption) -> Self {
        self.options.0.insert(option);
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = ComparisonOption>) -> Self {
        self.options.extend(options);
        self
    }
}
