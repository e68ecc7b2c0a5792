use super::weight::Weight;

/// The shipment being quoted or gated: its composite identity plus the
/// measured weight, if the host knows it yet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shipment {
    method_id: String,
    order_id: String,
    shipment_id: String,
    weight: Option<Weight>,
}

impl Shipment {
    #[must_use]
    pub fn new(
        method_id: impl Into<String>,
        order_id: impl Into<String>,
        shipment_id: impl Into<String>,
    ) -> Self {
        Self {
            method_id: method_id.into(),
            order_id: order_id.into(),
            shipment_id: shipment_id.into(),
            weight: None,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub fn method_id(&self) -> &str {
        &self.method_id
    }

    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    #[must_use]
    pub fn shipment_id(&self) -> &str {
        &self.shipment_id
    }

    /// The measured weight, or `None` for an unmeasured shipment.
    #[must_use]
    pub fn weight(&self) -> Option<&Weight> {
        self.weight.as_ref()
    }

    /// The key condition evaluations are recorded under.
    #[must_use]
    pub fn state_key(&self) -> String {
        format!(
            "shipment_{}-{}_{}_weight_condition",
            self.method_id, self.order_id, self.shipment_id
        )
    }
}
