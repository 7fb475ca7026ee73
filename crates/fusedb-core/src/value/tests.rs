use crate::{
    types::{Date, Duration, Float64, Point, Timestamp},
    value::{Value, ValueCategory},
};
use ulid::Ulid;

fn representatives() -> Vec<(Value, ValueCategory)> {
    vec![
        (Value::Bool(true), ValueCategory::Other),
        (Value::Int(-3), ValueCategory::Number),
        (Value::Uint(7), ValueCategory::Number),
        (Value::Float64(Float64::new(1.5)), ValueCategory::Number),
        (Value::Text("hello".to_string()), ValueCategory::Text),
        (Value::Blob(vec![0, 1, 2]), ValueCategory::Other),
        (Value::Date(Date::from_days(19_000)), ValueCategory::Temporal),
        (
            Value::Timestamp(Timestamp::from_seconds(1_700_000_000)),
            ValueCategory::Temporal,
        ),
        (
            Value::Duration(Duration::from_seconds(60)),
            ValueCategory::Temporal,
        ),
        (Value::Point(Point::new(12.5, -3.25)), ValueCategory::Spatial),
        (Value::Ulid(Ulid::nil()), ValueCategory::Other),
        (Value::from_slice(&[1i64, 2i64]), ValueCategory::Other),
        (Value::Null, ValueCategory::Other),
    ]
}

#[test]
fn every_variant_classifies_to_its_category() {
    for (value, expected) in representatives() {
        assert_eq!(value.category(), expected, "value: {value:?}");
    }
}

#[test]
fn classification_is_deterministic() {
    for (value, _) in representatives() {
        assert_eq!(value.category(), value.category());
    }
}

#[test]
fn lists_classify_as_other_regardless_of_member_categories() {
    let homogeneous = Value::from_slice(&["a", "b"]);
    let mixed = Value::List(vec![Value::Int(1), Value::Text("x".to_string())]);
    let nested = Value::List(vec![Value::List(vec![Value::Uint(9)])]);
    let empty = Value::List(Vec::new());

    for list in [homogeneous, mixed, nested, empty] {
        assert_eq!(list.category(), ValueCategory::Other);
    }
}

#[test]
fn category_ordinals_are_distinct_and_in_range() {
    let mut seen = [false; crate::value::CATEGORY_COUNT];
    for category in ValueCategory::ALL {
        let ordinal = category.ordinal();
        assert!(!seen[ordinal], "duplicate ordinal for {category}");
        seen[ordinal] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn nan_floats_are_equal_to_themselves() {
    let nan = Value::Float64(Float64::new(f64::NAN));
    assert_eq!(nan, nan.clone());
    assert_eq!(nan.category(), ValueCategory::Number);
}

#[test]
fn text_accessors_match_variant() {
    let text = Value::from("hello");
    assert!(text.is_text());
    assert_eq!(text.as_text(), Some("hello"));
    assert_eq!(Value::Int(1).as_text(), None);
}
