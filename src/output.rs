//! Canonical text rendering for predicate trees.
//!
//! Every node type renders to exactly one string. Rendering is pure and
//! cannot fail: any tree that could be constructed can be printed.
//!
//! # Rules
//!
//! - **Literals** - `NULL`, `TRUE`/`FALSE`, shortest decimal form for
//!   numbers, double-quoted escaped strings, `<hex>` for data, `{a, b}`
//!   for collections
//! - **Special floats** - `NAN`, `INFINITY`, `-INFINITY`; negative zero
//!   prints as `0`
//! - **Key paths** - emitted verbatim
//! - **Comparisons** - `[modifier] left operator+options right`, options in
//!   ascending token order
//! - **Compounds** - children joined by ` AND ` / ` OR `; a child that is
//!   itself a compound is wrapped in parentheses, even when it has a
//!   single child (`(a = 1) OR b = 2`)
//! - **Negation** - `NOT ` followed by the operand, parenthesized when the
//!   operand is a compound
//!
//! # Examples
//!
//! ```
//! use predicate_lang::builder::{and, eq, gt};
//! use predicate_lang::output::to_query;
//!
//! let predicate = and([eq("name", "Bob"), gt("age", 21)]).unwrap();
//! assert_eq!(to_query(&predicate), "name = \"Bob\" AND age > 21");
//! ```

use std::fmt;

use crate::ast::{Comparison, Expression, Predicate};
use crate::value::Value;

/// Binding strength of a predicate node, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Or,
    And,
    Not,
    Atom,
}

fn precedence(predicate: &Predicate) -> Precedence {
    use crate::ast::BoolOp;
    match predicate {
        Predicate::Compound { op: BoolOp::Or, .. } => Precedence::Or,
        Predicate::Compound { op: BoolOp::And, .. } => Precedence::And,
        Predicate::Not(_) => Precedence::Not,
        Predicate::Comparison(_) | Predicate::Expression(_) => Precedence::Atom,
    }
}

pub struct QueryPrinter;

impl QueryPrinter {
    pub fn print_predicate(&self, predicate: &Predicate) -> String {
        match predicate {
            Predicate::Comparison(c) => self.print_comparison(c),
            Predicate::Expression(e) => self.print_expression(e),
            Predicate::Not(inner) => format!("NOT {}", self.print_operand(inner)),
            Predicate::Compound { op, children } => {
                let separator = format!(" {} ", op.token());
                children
                    .iter()
                    .map(|child| self.print_operand(child))
                    .collect::<Vec<_>>()
                    .join(&separator)
            }
        }
    }

    /// Print a child of a compound or NOT node.
    ///
    /// Compound operands are always grouped, so `(A AND B) OR C` keeps the
    /// inner node visible and `(A AND B) AND C` stays distinct from `A AND B AND C`.
    fn print_operand(&self, child: &Predicate) -> String {
        let printed = self.print_predicate(child);
        if precedence(child) <= Precedence::And {
            format!("({})", printed)
        } else {
            printed
        }
    }

    pub fn print_comparison(&self, comparison: &Comparison) -> String {
        let modifier = comparison
            .modifier
            .map(|m| m.token().to_string())
            .unwrap_or_default();

        let options: String = comparison
            .options
            .canonical()
            .into_iter()
            .map(|opt| opt.token())
            .collect();

        let components = [
            modifier,
            self.print_expression(&comparison.left),
            format!("{}{}", comparison.operator.token(), options),
            self.print_expression(&comparison.right),
        ];

        components
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn print_expression(&self, expression: &Expression) -> String {
        match expression {
            Expression::Literal(value) => self.print_value(value),
            Expression::KeyPath(path) => path.clone(),
        }
    }

    pub fn print_value(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Boolean(true) => "TRUE".to_string(),
            Value::Boolean(false) => "FALSE".to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => self.print_float(*n),
            Value::Decimal(d) => d.normalize().to_string(),
            Value::String(s) => format!("\"{}\"", self.escape_string(s)),
            Value::Data(bytes) => {
                let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
                format!("<{}>", hex)
            }
            Value::Collection(items) => {
                let items: Vec<String> = items.iter().map(|v| self.print_value(v)).collect();
                format!("{{{}}}", items.join(", "))
            }
        }
    }

    fn print_float(&self, n: f64) -> String {
        if n.is_nan() {
            "NAN".to_string()
        } else if n.is_infinite() {
            if n > 0.0 { "INFINITY" } else { "-INFINITY" }.to_string()
        } else if n == 0.0 {
            "0".to_string()
        } else {
            n.to_string()
        }
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c if c.is_control() => format!("\\u{:04x}", c as u32).chars().collect(),
                c => vec![c],
            })
            .collect()
    }
}

/// Render a predicate in canonical form.
pub fn to_query(predicate: &Predicate) -> String {
    QueryPrinter.print_predicate(predicate)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&QueryPrinter.print_value(self))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&QueryPrinter.print_expression(self))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&QueryPrinter.print_comparison(self))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&QueryPrinter.print_predicate(self))
    }
}
