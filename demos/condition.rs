use parcelrate::{
    ConditionConfig, MeasurementConfig, MemorySink, Shipment, Weight, WeightCondition, WeightUnit,
};

fn main() {
    // The raw shape a host persists.
    let config = ConditionConfig {
        operator: "<".into(),
        weight: MeasurementConfig {
            number: "5".into(),
            unit: "lb".into(),
        },
    };
    let condition = WeightCondition::from_config(&config).expect("stored condition should resolve");

    let sink = MemorySink::new();
    let shipment = Shipment::new("by_weight", "1042", "7")
        .with_weight(Weight::new("72".parse().unwrap(), WeightUnit::Ounce));

    let applies = condition.evaluate(&shipment, &sink);
    println!("{condition} for a 72 oz shipment: {applies}");

    let record = sink.get(&shipment.state_key()).expect("evaluation recorded");
    println!(
        "recorded under {}: outcome = {}",
        shipment.state_key(),
        record.outcome
    );
}
