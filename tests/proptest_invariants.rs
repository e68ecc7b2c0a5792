use parcelrate::{Money, Operator, Rule, RuleTable, Weight, WeightUnit};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Generate a bounded decimal with up to four fractional digits.
fn arb_decimal() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..=4)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Non-negative variant for thresholds and prices.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn arb_unit() -> impl Strategy<Value = WeightUnit> {
    prop::sample::select(WeightUnit::ALL.to_vec())
}

fn arb_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    (arb_amount(), arb_unit(), arb_operator(), arb_amount(), "[A-Z]{3}").prop_map(
        |(threshold, unit, operator, price, currency)| {
            Rule::new(
                Weight::new(threshold, unit),
                operator,
                Money::new(price, currency),
            )
        },
    )
}

proptest! {
    /// serialize -> parse reproduces the same rules in the same order.
    #[test]
    fn round_trip(rules in prop::collection::vec(arb_rule(), 0..8)) {
        let table = RuleTable::new(rules);
        let reparsed = RuleTable::from_text(&table.to_text()).unwrap();
        prop_assert_eq!(&reparsed, &table);
        // Serialization is a fixed point of the normalization.
        prop_assert_eq!(reparsed.to_text(), table.to_text());
    }

    /// The selected rule is the first satisfied one: nothing before it
    /// matches, and it matches -- or nothing matches at all.
    #[test]
    fn first_match_is_minimal(
        rules in prop::collection::vec(arb_rule(), 0..6),
        value in arb_amount(),
        unit in arb_unit(),
    ) {
        let table = RuleTable::new(rules);
        let weight = Weight::new(value, unit);
        match table.first_match(&weight) {
            Some((idx, rule)) => {
                prop_assert!(rule.matches(&weight));
                for earlier in &table.rules()[..idx] {
                    prop_assert!(!earlier.matches(&weight));
                }
            }
            None => {
                for rule in table.rules() {
                    prop_assert!(!rule.matches(&weight));
                }
            }
        }
    }

    /// `>=` is exactly `>` or `==`, and `<=` is exactly `<` or `==`.
    #[test]
    fn inclusive_operators_decompose(
        value in arb_decimal(),
        unit in arb_unit(),
        threshold in arb_decimal(),
        threshold_unit in arb_unit(),
    ) {
        let w = Weight::new(value, unit);
        let t = Weight::new(threshold, threshold_unit);
        let holds = |op: Operator| w.satisfies(op, &t);

        prop_assert_eq!(holds(Operator::Gte), holds(Operator::Gt) || holds(Operator::Eq));
        prop_assert_eq!(holds(Operator::Lte), holds(Operator::Lt) || holds(Operator::Eq));
    }

    /// Exactly one of `<`, `==`, `>` holds for any pair of weights.
    #[test]
    fn trichotomy(
        value in arb_decimal(),
        unit in arb_unit(),
        threshold in arb_decimal(),
        threshold_unit in arb_unit(),
    ) {
        let w = Weight::new(value, unit);
        let t = Weight::new(threshold, threshold_unit);
        let count = [Operator::Lt, Operator::Eq, Operator::Gt]
            .into_iter()
            .filter(|&op| w.satisfies(op, &t))
            .count();
        prop_assert_eq!(count, 1);
    }

    /// Metric conversions scale by powers of ten, so they round-trip
    /// exactly.
    #[test]
    fn metric_conversion_round_trips(
        value in arb_decimal(),
        src in prop::sample::select(vec![
            WeightUnit::Milligram,
            WeightUnit::Gram,
            WeightUnit::Kilogram,
        ]),
        dst in prop::sample::select(vec![
            WeightUnit::Milligram,
            WeightUnit::Gram,
            WeightUnit::Kilogram,
        ]),
    ) {
        let w = Weight::new(value, src);
        let back = w.convert(dst).convert(src);
        prop_assert_eq!(back.value(), w.value());
    }

    /// A pound is exactly sixteen ounces, so oz <-> lb round-trips exactly.
    #[test]
    fn ounce_pound_conversion_round_trips(value in arb_decimal()) {
        let oz = Weight::new(value, WeightUnit::Ounce);
        prop_assert_eq!(
            oz.convert(WeightUnit::Pound).convert(WeightUnit::Ounce).value(),
            oz.value()
        );

        let lb = Weight::new(value, WeightUnit::Pound);
        prop_assert_eq!(
            lb.convert(WeightUnit::Ounce).convert(WeightUnit::Pound).value(),
            lb.value()
        );
    }

    /// Pre-converting the measured weight into the threshold's unit never
    /// changes the verdict.
    #[test]
    fn satisfies_agrees_with_explicit_conversion(
        value in arb_decimal(),
        unit in arb_unit(),
        threshold in arb_decimal(),
        threshold_unit in arb_unit(),
        op in arb_operator(),
    ) {
        let w = Weight::new(value, unit);
        let t = Weight::new(threshold, threshold_unit);
        prop_assert_eq!(
            w.satisfies(op, &t),
            w.convert(threshold_unit).satisfies(op, &t)
        );
    }
}
