use parcelrate::{
    Money, RuleTable, Shipment, ShippingService, Weight, WeightTableMethod, WeightUnit,
};

fn main() {
    let table = RuleTable::from_text(
        "1,lb,<,5.00,USD\n\
         5,lb,<,10.00,USD\n\
         50,lb,<,20.00,USD",
    )
    .expect("rule text should parse");

    let method = WeightTableMethod::new(
        ShippingService::new("default", "Shipping by weight"),
        Money::new("7.50".parse().unwrap(), "USD"),
        table,
    );

    let shipment = Shipment::new("by_weight", "1042", "7")
        .with_weight(Weight::new("3.2".parse().unwrap(), WeightUnit::Pound));

    match method.rates(&shipment) {
        Some(rate) => println!("{rate}"),
        None => println!("No rate for this shipment."),
    }
}
