use thiserror::Error;

use super::unit::WeightUnit;

/// Errors surfaced while resolving configuration values or comparing
/// weights. Defects in already-accepted data fail the operation loudly;
/// a silently wrong price is the worst failure mode in a pricing engine.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("invalid operator '{token}'")]
    InvalidOperator { token: String },

    #[error("unsupported mass unit '{unit}'")]
    UnsupportedUnit { unit: String },

    #[error("cannot compare {left} against {right} without conversion")]
    UnitMismatch {
        left: WeightUnit,
        right: WeightUnit,
    },

    #[error("malformed decimal number '{value}'")]
    MalformedNumber { value: String },
}
