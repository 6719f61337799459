//! Property tests: the covariance laws hold over generated values, not just
//! hand-picked representatives.

use proptest::prelude::*;

use cypher_types::{IsoDuration, TypeConstructor, Value, TYPE_SYSTEM};

/// Arbitrary scalar values, plus shallow lists and maps built from them.
fn arb_value() -> impl Strategy<Value = Value> {
    let scalar = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        ".{0,12}".prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::Bytes),
        (any::<i16>(), any::<i16>(), any::<i32>()).prop_map(|(m, d, n)| {
            Value::Duration(IsoDuration {
                months: m as i64,
                days: d as i64,
                seconds: n as i64,
                nanoseconds: 0,
            })
        }),
        (0..10_000i32, any::<f64>(), any::<f64>())
            .prop_map(|(srid, x, y)| Value::Point2D { srid, x, y }),
        (0..10_000i32, any::<f64>(), any::<f64>(), any::<f64>())
            .prop_map(|(srid, x, y, z)| Value::Point3D { srid, x, y, z }),
    ];
    scalar.prop_recursive(2, 32, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::List),
            prop::collection::hash_map(".{0,6}", inner, 0..8).prop_map(Value::Map),
        ]
    })
}

proptest! {
    #[test]
    fn prop_number_is_exactly_integer_or_float(v in arb_value()) {
        let number = TYPE_SYSTEM.number().is_type_of(&v);
        let int_or_float = TYPE_SYSTEM.integer().is_type_of(&v)
            || TYPE_SYSTEM.float().is_type_of(&v);
        prop_assert_eq!(number, int_or_float);
    }

    #[test]
    fn prop_any_covers_everything_but_null(v in arb_value()) {
        prop_assert_eq!(TYPE_SYSTEM.any().is_type_of(&v), !v.is_null());
    }

    #[test]
    fn prop_null_covers_only_the_marker(v in arb_value()) {
        prop_assert_eq!(TYPE_SYSTEM.null().is_type_of(&v), v.is_null());
    }

    #[test]
    fn prop_every_predicate_is_total(v in arb_value()) {
        for c in TypeConstructor::ALL {
            let _ = c.covers(&v);
        }
    }

    #[test]
    fn prop_type_of_is_a_matching_leaf(v in arb_value()) {
        let own = TYPE_SYSTEM.type_of(&v);
        prop_assert!(own.is_type_of(&v));
        prop_assert_eq!(own.name(), TypeConstructor::of(&v).name());
    }
}
