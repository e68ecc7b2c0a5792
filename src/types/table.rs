use std::fmt;

use super::money::Money;
use super::rate::{Rate, ShippingService};
use super::rule::Rule;
use super::weight::Weight;
use crate::parse::ParseError;
use crate::select::FallbackPolicy;

/// An immutable, strictly ordered sequence of [`Rule`]s.
///
/// Order is semantically significant: the first rule whose comparison holds
/// wins. A table is never mutated in place -- configuration changes build a
/// new table and swap it in (e.g. behind an `Arc`), so in-flight
/// evaluations always read a consistent snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse the line-oriented rule text into a table.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] identifying the offending line. Surface this
    /// at configuration-save time so bad rule text never reaches quoting.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        crate::parse::parse(text).map(Self::new)
    }

    /// Read rule text from a file and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`ParcelrateError`](crate::ParcelrateError) on I/O or parse
    /// failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::ParcelrateError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text)?)
    }

    /// Serialize back to the line-oriented text format, preserving order.
    #[must_use]
    pub fn to_text(&self) -> String {
        crate::parse::serialize(&self.rules)
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Walk the rules in stored order and return the first whose comparison
    /// holds, with its zero-based position. Later rules are not consulted.
    #[must_use]
    pub fn first_match(&self, weight: &Weight) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(weight))
    }

    /// Select the amount a shipment of `weight` should be charged.
    ///
    /// A matching rule's own price wins; with no match the `fallback`
    /// policy decides between `base` and no quote. An unknown weight
    /// (`None`) never quotes.
    #[must_use]
    pub fn select_amount(
        &self,
        weight: Option<&Weight>,
        base: &Money,
        fallback: FallbackPolicy,
    ) -> Option<Money> {
        crate::select::select_amount(self, weight, base, fallback)
    }

    /// [`select_amount`](Self::select_amount) wrapped into a [`Rate`] for
    /// the given service.
    #[must_use]
    pub fn select_rate(
        &self,
        weight: Option<&Weight>,
        base: &Money,
        fallback: FallbackPolicy,
        service: &ShippingService,
    ) -> Option<Rate> {
        crate::select::select_rate(self, weight, base, fallback, service)
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
