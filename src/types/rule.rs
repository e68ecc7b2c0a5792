use std::fmt;

use super::money::Money;
use super::operator::Operator;
use super::weight::Weight;

/// One weight-threshold-to-price mapping, evaluated in table order.
///
/// Fields are validated and converted once at construction; evaluation
/// never re-trims or re-parses strings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    threshold: Weight,
    operator: Operator,
    price: Money,
}

impl Rule {
    #[must_use]
    pub fn new(threshold: Weight, operator: Operator, price: Money) -> Self {
        Self {
            threshold,
            operator,
            price,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> &Weight {
        &self.threshold
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn price(&self) -> &Money {
        &self.price
    }

    /// Does `weight` satisfy this rule? The weight is converted into the
    /// threshold's unit before comparing.
    #[must_use]
    pub fn matches(&self, weight: &Weight) -> bool {
        weight.satisfies(self.operator, &self.threshold)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.threshold.value(),
            self.threshold.unit(),
            self.operator,
            self.price.amount(),
            self.price.currency(),
        )
    }
}
