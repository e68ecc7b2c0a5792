use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::EvalError;

/// The mass units a rule table or condition may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeightUnit {
    Milligram,
    Gram,
    Kilogram,
    Ounce,
    Pound,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 5] = [
        WeightUnit::Milligram,
        WeightUnit::Gram,
        WeightUnit::Kilogram,
        WeightUnit::Ounce,
        WeightUnit::Pound,
    ];

    /// The symbol as written in rule tables and host configuration.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            WeightUnit::Milligram => "mg",
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Ounce => "oz",
            WeightUnit::Pound => "lb",
        }
    }

    /// Resolve a unit symbol, trimming surrounding whitespace.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<WeightUnit> {
        match symbol.trim() {
            "mg" => Some(WeightUnit::Milligram),
            "g" => Some(WeightUnit::Gram),
            "kg" => Some(WeightUnit::Kilogram),
            "oz" => Some(WeightUnit::Ounce),
            "lb" => Some(WeightUnit::Pound),
            _ => None,
        }
    }

    /// Exact milligrams per one of this unit. Avoirdupois ounce and pound
    /// carry their exact legal definitions (28.349523125 g, 453.59237 g),
    /// so every conversion factor terminates as a decimal.
    pub(crate) fn milligrams(&self) -> Decimal {
        match self {
            WeightUnit::Milligram => Decimal::ONE,
            WeightUnit::Gram => Decimal::new(1_000, 0),
            WeightUnit::Kilogram => Decimal::new(1_000_000, 0),
            WeightUnit::Ounce => Decimal::new(28_349_523_125, 6),
            WeightUnit::Pound => Decimal::new(45_359_237, 2),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeightUnit::from_symbol(s).ok_or_else(|| EvalError::UnsupportedUnit {
            unit: s.trim().to_owned(),
        })
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
