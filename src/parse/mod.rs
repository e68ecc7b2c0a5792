//! Parsing and serialization of the line-oriented rule-table format.
//!
//! One rule per line, fields comma-separated, in fixed order:
//!
//! ```text
//! weight,unit,operator,price[,currency]
//! 1,lb,<,5.00,USD
//! 5,lb,<,10.00,USD
//! ```
//!
//! Surrounding whitespace on the text, each line, and each field is
//! insignificant. A missing (or empty) fifth field defaults the currency to
//! `USD`. Blank lines are skipped; empty or whitespace-only input parses to
//! an empty rule sequence. `serialize(parse(text))` reproduces `text` up to
//! that normalization, in the original rule order.

mod error;
mod grammar;

use std::str::FromStr;

use rust_decimal::Decimal;
use winnow::Parser;

use crate::types::{Money, Operator, Rule, Weight, WeightUnit, DEFAULT_CURRENCY};

pub use error::ParseError;

/// Parse rule-table text into an ordered sequence of rules.
///
/// # Errors
///
/// Returns [`ParseError`] naming the first offending line (1-indexed).
pub(crate) fn parse(text: &str) -> Result<Vec<Rule>, ParseError> {
    let mut rules = Vec::new();
    for (idx, line) in text.trim().lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let raw = grammar::rule_line.parse(trimmed).map_err(|_| {
            ParseError::MalformedRule {
                line: line_no,
                raw: trimmed.to_owned(),
                reason: "expected 'weight,unit,operator,price[,currency]'".to_owned(),
            }
        })?;
        rules.push(resolve(&raw, line_no, trimmed)?);
    }
    Ok(rules)
}

/// Serialize rules back to the text format, one line per rule, preserving
/// order.
pub(crate) fn serialize(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolve(raw: &grammar::RawRule<'_>, line: usize, raw_line: &str) -> Result<Rule, ParseError> {
    let weight = decimal_field(raw.weight, "weight", line, raw_line)?;
    let unit = WeightUnit::from_symbol(raw.unit).ok_or_else(|| ParseError::MalformedRule {
        line,
        raw: raw_line.to_owned(),
        reason: format!("unknown mass unit '{}'", raw.unit.trim()),
    })?;
    let operator = Operator::from_token(raw.operator).ok_or_else(|| ParseError::InvalidOperator {
        line,
        token: raw.operator.trim().to_owned(),
    })?;
    let price = decimal_field(raw.price, "price", line, raw_line)?;
    let currency = match raw.currency.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_owned(),
        _ => DEFAULT_CURRENCY.to_owned(),
    };
    Ok(Rule::new(
        Weight::new(weight, unit),
        operator,
        Money::new(price, currency),
    ))
}

fn decimal_field(
    field: &str,
    name: &str,
    line: usize,
    raw_line: &str,
) -> Result<Decimal, ParseError> {
    Decimal::from_str(field.trim()).map_err(|_| ParseError::MalformedRule {
        line,
        raw: raw_line.to_owned(),
        reason: format!("invalid {} '{}'", name, field.trim()),
    })
}
