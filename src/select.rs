use crate::types::{Money, Rate, RuleTable, ShippingService, Weight};

/// What the selector does when no rule's comparison holds.
///
/// The default is [`NoQuote`](FallbackPolicy::NoQuote): no match means the
/// method cannot quote the shipment. Hosts that want the configured base
/// amount to act as a catch-all rate opt into
/// [`BaseRate`](FallbackPolicy::BaseRate) explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FallbackPolicy {
    #[default]
    NoQuote,
    BaseRate,
}

/// Walk the table in stored order and price the first satisfied rule.
///
/// The matching rule's own price/currency become the amount; `base` is
/// consulted only under [`FallbackPolicy::BaseRate`]. An unknown weight
/// never quotes, regardless of policy.
pub(crate) fn select_amount(
    table: &RuleTable,
    weight: Option<&Weight>,
    base: &Money,
    fallback: FallbackPolicy,
) -> Option<Money> {
    let weight = weight?;
    match table.first_match(weight) {
        Some((_, rule)) => Some(rule.price().clone()),
        None => match fallback {
            FallbackPolicy::NoQuote => None,
            FallbackPolicy::BaseRate => Some(base.clone()),
        },
    }
}

pub(crate) fn select_rate(
    table: &RuleTable,
    weight: Option<&Weight>,
    base: &Money,
    fallback: FallbackPolicy,
    service: &ShippingService,
) -> Option<Rate> {
    let amount = select_amount(table, weight, base, fallback)?;
    // Rate ids carry no meaning in a flat-rate scenario; there is always a
    // single rate per method.
    Some(Rate::new("0", service.clone(), amount))
}
