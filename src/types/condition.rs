use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::EvalError;
use super::operator::Operator;
use super::shipment::Shipment;
use super::unit::WeightUnit;
use super::weight::Weight;
use crate::state::StateSink;

/// A standalone weight threshold used for boolean gating rather than
/// pricing: a degenerate one-rule table without a price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightCondition {
    operator: Operator,
    threshold: Weight,
}

impl WeightCondition {
    #[must_use]
    pub fn new(operator: Operator, threshold: Weight) -> Self {
        Self {
            operator,
            threshold,
        }
    }

    /// Resolve a raw host-persisted configuration into a validated
    /// condition.
    ///
    /// # Errors
    ///
    /// Fails loudly so misconfigured stored data surfaces immediately:
    /// [`EvalError::InvalidOperator`] for an unrecognized operator token,
    /// [`EvalError::UnsupportedUnit`] for an unknown unit symbol,
    /// [`EvalError::MalformedNumber`] for an unparsable threshold value.
    pub fn from_config(config: &ConditionConfig) -> Result<Self, EvalError> {
        let operator = config.operator.parse()?;
        let unit: WeightUnit = config.weight.unit.parse()?;
        let number =
            Decimal::from_str(config.weight.number.trim()).map_err(|_| {
                EvalError::MalformedNumber {
                    value: config.weight.number.trim().to_owned(),
                }
            })?;
        Ok(Self::new(operator, Weight::new(number, unit)))
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn threshold(&self) -> &Weight {
        &self.threshold
    }

    /// Evaluate this condition against a shipment.
    ///
    /// An unmeasured shipment is conservatively "condition not met":
    /// `false`, never an error, and nothing is recorded. Otherwise the
    /// shipment weight is converted into the threshold's unit, compared,
    /// and the evaluated condition is reported to `sink` under
    /// [`Shipment::state_key`].
    #[must_use]
    pub fn evaluate(&self, shipment: &Shipment, sink: &dyn StateSink) -> bool {
        crate::evaluate::evaluate_condition(self, shipment, sink)
    }
}

impl fmt::Display for WeightCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weight {} {}", self.operator, self.threshold)
    }
}

/// Raw condition configuration as a host persists it: operator token plus
/// `{number, unit}` strings, resolved via [`WeightCondition::from_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionConfig {
    pub operator: String,
    pub weight: MeasurementConfig,
}

/// The `{number, unit}` half of a [`ConditionConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementConfig {
    pub number: String,
    pub unit: String,
}

/// What a condition evaluation reports to the state sink: the condition as
/// evaluated, plus its outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionRecord {
    pub operator: Operator,
    pub threshold: Weight,
    pub outcome: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(operator: &str, number: &str, unit: &str) -> ConditionConfig {
        ConditionConfig {
            operator: operator.into(),
            weight: MeasurementConfig {
                number: number.into(),
                unit: unit.into(),
            },
        }
    }

    #[test]
    fn from_config_resolves_fields() {
        let condition = WeightCondition::from_config(&config("<", "5.5", "kg")).unwrap();
        assert_eq!(condition.operator(), Operator::Lt);
        assert_eq!(
            condition.threshold(),
            &Weight::new("5.5".parse().unwrap(), WeightUnit::Kilogram)
        );
    }

    #[test]
    fn from_config_trims_fields() {
        let condition = WeightCondition::from_config(&config(" >= ", " 2 ", " lb ")).unwrap();
        assert_eq!(condition.operator(), Operator::Gte);
        assert_eq!(condition.threshold().unit(), WeightUnit::Pound);
    }

    #[test]
    fn from_config_rejects_invalid_operator() {
        let err = WeightCondition::from_config(&config("!=", "1", "lb")).unwrap_err();
        assert!(matches!(err, EvalError::InvalidOperator { token } if token == "!="));
    }

    #[test]
    fn from_config_rejects_unknown_unit() {
        let err = WeightCondition::from_config(&config("<", "1", "stone")).unwrap_err();
        assert!(matches!(err, EvalError::UnsupportedUnit { unit } if unit == "stone"));
    }

    #[test]
    fn from_config_rejects_bad_number() {
        let err = WeightCondition::from_config(&config("<", "1.2.3", "lb")).unwrap_err();
        assert!(matches!(err, EvalError::MalformedNumber { value } if value == "1.2.3"));
    }

    #[test]
    fn display() {
        let condition = WeightCondition::new(
            Operator::Lt,
            Weight::new("5".parse().unwrap(), WeightUnit::Pound),
        );
        assert_eq!(condition.to_string(), "weight < 5 lb");
    }
}
