use std::fmt;
use std::str::FromStr;

use crate::error::PredicateError;

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessThanOrEqualTo,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterThanOrEqualTo,
    /// Equal (`=`)
    EqualTo,
    /// Not equal (`!=`)
    NotEqualTo,
    /// Regular expression match (`MATCHES`)
    Matches,
    /// Wildcard match with `*` and `?` (`LIKE`)
    Like,
    /// Prefix match (`BEGINSWITH`)
    BeginsWith,
    /// Suffix match (`ENDSWITH`)
    EndsWith,
    /// Membership in a collection (`IN`)
    In,
    /// Collection or substring containment (`CONTAINS`)
    Contains,
    /// Inclusive range over a two-element collection (`BETWEEN`)
    Between,
}

impl Operator {
    pub const ALL: [Operator; 13] = [
        Operator::LessThan,
        Operator::LessThanOrEqualTo,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqualTo,
        Operator::EqualTo,
        Operator::NotEqualTo,
        Operator::Matches,
        Operator::Like,
        Operator::BeginsWith,
        Operator::EndsWith,
        Operator::In,
        Operator::Contains,
        Operator::Between,
    ];

    /// Canonical token
    pub fn token(self) -> &'static str {
        match self {
            Operator::LessThan => "<",
            Operator::LessThanOrEqualTo => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqualTo => ">=",
            Operator::EqualTo => "=",
            Operator::NotEqualTo => "!=",
            Operator::Matches => "MATCHES",
            Operator::Like => "LIKE",
            Operator::BeginsWith => "BEGINSWITH",
            Operator::EndsWith => "ENDSWITH",
            Operator::In => "IN",
            Operator::Contains => "CONTAINS",
            Operator::Between => "BETWEEN",
        }
    }
}

impl FromStr for Operator {
    type Err = PredicateError;

    /// Word operators are matched case-insensitively; `==` is accepted for `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token == "==" {
            return Ok(Operator::EqualTo);
        }
        Operator::ALL
            .into_iter()
            .find(|op| op.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                tracing::debug!(token, "rejected operator token");
                PredicateError::InvalidOperator(s.to_string())
            })
    }
}

/// Quantifier over a multi-valued left-hand expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// At least one element satisfies the comparison (`ANY`)
    Any,
    /// Every element satisfies the comparison (`ALL`)
    All,
}

impl Modifier {
    pub const ALL: [Modifier; 2] = [Modifier::Any, Modifier::All];

    pub fn token(self) -> &'static str {
        match self {
            Modifier::Any => "ANY",
            Modifier::All => "ALL",
        }
    }
}

impl FromStr for Modifier {
    type Err = PredicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Modifier::ALL
            .into_iter()
            .find(|m| m.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                tracing::debug!(token, "rejected modifier token");
                PredicateError::InvalidModifier(s.to_string())
            })
    }
}

/// Option flag attached to a comparison's operator.
///
/// Options render as a suffix on the operator token, always in ascending
/// token order: `[c]`, `[d]`, `[l]`, `[n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOption {
    /// `[c]`
    CaseInsensitive,
    /// `[d]`
    DiacriticInsensitive,
    /// `[n]`
    Normalized,
    /// `[l]`
    LocaleSensitive,
}

impl ComparisonOption {
    pub const ALL: [ComparisonOption; 4] = [
        ComparisonOption::CaseInsensitive,
        ComparisonOption::DiacriticInsensitive,
        ComparisonOption::Normalized,
        ComparisonOption::LocaleSensitive,
    ];

    pub fn token(self) -> &'static str {
        match self {
            ComparisonOption::CaseInsensitive => "[c]",
            ComparisonOption::DiacriticInsensitive => "[d]",
            ComparisonOption::Normalized => "[n]",
            ComparisonOption::LocaleSensitive => "[l]",
        }
    }
}

impl FromStr for ComparisonOption {
    type Err = PredicateError;

    /// Accepts the bracketed token (`[c]`) or the bare letter (`c`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let bare = token
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .unwrap_or(token);
        ComparisonOption::ALL
            .into_iter()
            .find(|opt| opt.token()[1..2].eq_ignore_ascii_case(bare))
            .ok_or_else(|| {
                tracing::debug!(token, "rejected option token");
                PredicateError::InvalidOption(s.to_string())
            })
    }
}

/// Boolean connective of a compound predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    /// Logical AND (`AND`)
    And,
    /// Logical OR (`OR`)
    Or,
}

impl BoolOp {
    pub fn token(self) -> &'static str {
        match self {
            BoolOp::And => "AND",
            BoolOp::Or => "OR",
        }
    }
}

impl FromStr for BoolOp {
    type Err = PredicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" | "&&" => Ok(BoolOp::And),
            "OR" | "||" => Ok(BoolOp::Or),
            _ => Err(PredicateError::InvalidOperator(s.to_string())),
        }
    }
}

macro_rules! display_token {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.token())
                }
            }
        )*
    };
}

display_token!(Operator, Modifier, ComparisonOption, BoolOp);
