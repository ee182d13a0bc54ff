//! Token reference for the predicate CLI

use std::fmt::Write;

use crate::ast::{BoolOp, ComparisonOption, Modifier, Operator};

fn operator_summary(op: Operator) -> &'static str {
    match op {
        Operator::LessThan => "less than",
        Operator::LessThanOrEqualTo => "less than or equal to",
        Operator::GreaterThan => "greater than",
        Operator::GreaterThanOrEqualTo => "greater than or equal to",
        Operator::EqualTo => "equal to (also accepts ==)",
        Operator::NotEqualTo => "not equal to",
        Operator::Matches => "matches a regular expression",
        Operator::Like => "matches a wildcard pattern (* and ?)",
        Operator::BeginsWith => "starts with",
        Operator::EndsWith => "ends with",
        Operator::In => "is an element of a collection",
        Operator::Contains => "contains an element or substring",
        Operator::Between => "lies within a {low, high} collection",
    }
}

fn option_summary(option: ComparisonOption) -> &'static str {
    match option {
        ComparisonOption::CaseInsensitive => "case-insensitive",
        ComparisonOption::DiacriticInsensitive => "diacritic-insensitive",
        ComparisonOption::Normalized => "normalized (no case or diacritic folding needed)",
        ComparisonOption::LocaleSensitive => "locale-sensitive",
    }
}

/// Listing of every operator, modifier, option and boolean token
pub fn get_token_reference() -> String {
    let mut out = String::from("PREDICATE TOKENS\n\nOPERATORS\n");
    for op in Operator::ALL {
        let _ = writeln!(out, "  {:<12} {}", op.token(), operator_summary(op));
    }

    out.push_str("\nMODIFIERS\n");
    for m in Modifier::ALL {
        let _ = writeln!(out, "  {:<12} applies to {} elements of the left operand", m.token(), m.token().to_lowercase());
    }

    out.push_str("\nOPTIONS (rendered in ascending token order)\n");
    let mut options = ComparisonOption::ALL;
    options.sort_by_key(|opt| opt.token());
    for opt in options {
        let _ = writeln!(out, "  {:<12} {}", opt.token(), option_summary(opt));
    }

    out.push_str("\nBOOLEAN\n");
    for op in [BoolOp::And, BoolOp::Or] {
        let _ = writeln!(out, "  {}", op.token());
    }
    out.push_str("  NOT\n");
    out
}
