use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;

use super::error::EvalError;
use super::operator::Operator;
use super::unit::WeightUnit;

/// A measured mass: a decimal value paired with its unit.
///
/// All arithmetic is fixed-point decimal, so comparisons at threshold
/// boundaries are exact -- a shipment of exactly 5.00 lb satisfies `>= 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weight {
    value: Decimal,
    unit: WeightUnit,
}

impl Weight {
    #[must_use]
    pub fn new(value: Decimal, unit: WeightUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Convert into `target`, scaling through exact per-unit factors.
    ///
    /// Pure: returns a new weight, `self` is untouched.
    #[must_use]
    pub fn convert(&self, target: WeightUnit) -> Weight {
        if self.unit == target {
            return *self;
        }
        let milligrams = self.value * self.unit.milligrams();
        Weight {
            value: milligrams / target.milligrams(),
            unit: target,
        }
    }

    /// Ordered comparison against a weight of the same unit.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnitMismatch`] if the units differ. Callers must
    /// [`convert`](Self::convert) first; mismatched units are never coerced.
    pub fn cmp_checked(&self, other: &Weight) -> Result<Ordering, EvalError> {
        if self.unit != other.unit {
            return Err(EvalError::UnitMismatch {
                left: self.unit,
                right: other.unit,
            });
        }
        Ok(self.value.cmp(&other.value))
    }

    /// Does this weight satisfy `operator` against `threshold`?
    ///
    /// Converts into the threshold's unit before comparing, per the
    /// comparison contract.
    #[must_use]
    pub fn satisfies(&self, operator: Operator, threshold: &Weight) -> bool {
        let converted = self.convert(threshold.unit);
        operator.holds(converted.value.cmp(&threshold.value))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
