use super::money::Money;
use super::rate::{Rate, ShippingService};
use super::shipment::Shipment;
use super::table::RuleTable;
use crate::select::FallbackPolicy;

/// A configured weight-table shipping method: the service it offers, its
/// base rate amount, the rule table, and the no-match policy.
///
/// Immutable after construction. Configuration changes build a new method
/// via the `with_*` methods and swap the instance (e.g. behind an `Arc`);
/// concurrent quoting always sees a consistent configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightTableMethod {
    service: ShippingService,
    base_rate: Money,
    table: RuleTable,
    fallback: FallbackPolicy,
}

impl WeightTableMethod {
    #[must_use]
    pub fn new(service: ShippingService, base_rate: Money, table: RuleTable) -> Self {
        Self {
            service,
            base_rate,
            table,
            fallback: FallbackPolicy::default(),
        }
    }

    /// Replace the no-match policy.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replace the rule table, leaving the rest of the configuration as is.
    #[must_use]
    pub fn with_table(mut self, table: RuleTable) -> Self {
        self.table = table;
        self
    }

    #[must_use]
    pub fn service(&self) -> &ShippingService {
        &self.service
    }

    #[must_use]
    pub fn base_rate(&self) -> &Money {
        &self.base_rate
    }

    #[must_use]
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    #[must_use]
    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Quote the shipment: first satisfied rule wins, its price becomes the
    /// rate amount. An unmeasured shipment cannot be quoted.
    #[must_use]
    pub fn rates(&self, shipment: &Shipment) -> Option<Rate> {
        self.table.select_rate(
            shipment.weight(),
            &self.base_rate,
            self.fallback,
            &self.service,
        )
    }
}
