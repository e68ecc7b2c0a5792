mod error;
mod evaluate;
mod parse;
mod select;
mod state;
mod types;

pub use error::ParcelrateError;
pub use parse::ParseError;
pub use select::FallbackPolicy;
pub use state::{MemorySink, NoopSink, StateSink};
pub use types::{
    ConditionConfig, ConditionRecord, EvalError, MeasurementConfig, Money, Operator, Rate, Rule,
    RuleTable, Shipment, ShippingService, Weight, WeightCondition, WeightTableMethod, WeightUnit,
    DEFAULT_CURRENCY,
};
