use std::fmt;

use super::money::Money;

/// A shipping service a method offers, with the label shown to customers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShippingService {
    id: String,
    label: String,
}

impl ShippingService {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A priced shipping option handed back to the host. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Rate {
    id: String,
    service: ShippingService,
    amount: Money,
}

impl Rate {
    pub fn new(id: impl Into<String>, service: ShippingService, amount: Money) -> Self {
        Self {
            id: id.into(),
            service,
            amount,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn service(&self) -> &ShippingService {
        &self.service
    }

    #[must_use]
    pub fn amount(&self) -> &Money {
        &self.amount
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.service.label(), self.amount)
    }
}
