use crate::state::StateSink;
use crate::types::{ConditionRecord, Shipment, WeightCondition};

/// Evaluate a weight condition against a shipment and report the outcome
/// to the state sink.
///
/// An unmeasured shipment is "condition not met": returns `false` without
/// recording anything, since there is nothing to evaluate yet.
pub(crate) fn evaluate_condition(
    condition: &WeightCondition,
    shipment: &Shipment,
    sink: &dyn StateSink,
) -> bool {
    let Some(weight) = shipment.weight() else {
        return false;
    };

    let outcome = weight.satisfies(condition.operator(), condition.threshold());

    sink.set(
        &shipment.state_key(),
        ConditionRecord {
            operator: condition.operator(),
            threshold: *condition.threshold(),
            outcome,
        },
    );

    outcome
}
