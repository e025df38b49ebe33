use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn degenerate_intervals_normalize_to_scalars() {
    let int = Interval::new(3, 3).map(Value::IntInterval);
    assert_eq!(int.map(Value::normalized), Some(Value::Int(3)));

    let long = Interval::new(-7_i64, -7).map(Value::LongInterval);
    assert_eq!(long.map(Value::normalized), Some(Value::Long(-7)));

    let float = Interval::new(0.5, 0.5).map(Value::FloatInterval);
    assert_eq!(float.map(Value::normalized), Some(Value::Float(0.5)));
}

#[test]
fn proper_intervals_survive_normalization() {
    let interval = Interval::new(1, 4).map(Value::IntInterval);
    assert_eq!(interval.clone().map(Value::normalized), interval);
}

#[test]
fn interval_rejects_reversed_and_nan_bounds() {
    assert!(Interval::new(5, 4).is_none());
    assert!(Interval::new(f64::NAN, 1.0).is_none());
    assert_eq!(Interval::spanning(5, 4), Interval::new(4, 5));
}

#[test]
fn interval_zero_queries() {
    let spans = Interval::new(-2, 2).map(Interval::contains_zero);
    assert_eq!(spans, Some(true));
    let zero = Interval::new(0, 0).map(Interval::is_zero);
    assert_eq!(zero, Some(true));
    let positive = Interval::new(1, 9).map(Interval::contains_zero);
    assert_eq!(positive, Some(false));
}

#[test]
fn floats_compare_by_bits() {
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_ne!(Value::Float(0.0), Value::Float(-0.0));
    assert_ne!(Value::Int(1), Value::Float(1.0));
}

#[test]
fn equal_values_hash_equal() {
    let mut set = HashSet::new();
    set.insert(Value::Float(f64::NAN));
    set.insert(Value::Float(f64::NAN));
    set.insert(Value::from("a"));
    set.insert(Value::from("a"));
    set.insert(Value::Any(AnyKind::String));
    assert_eq!(set.len(), 3);
}

#[test]
fn classification_is_exclusive() {
    let samples = [
        Value::Bool(true),
        Value::Int(1),
        Value::Str(String::new()),
        Value::Undefined,
        Value::Any(AnyKind::Value),
        Value::Function("strlen".to_owned()),
    ];
    for value in &samples {
        let count = [value.is_concrete(), value.is_abstract(), value.is_non_data()]
            .iter()
            .filter(|flag| **flag)
            .count();
        assert_eq!(count, 1, "{value} must be in exactly one class");
    }
}

#[test]
fn any_kind_fallback_chain() {
    assert_eq!(AnyKind::Boolean.parent(), Some(AnyKind::Scalar));
    assert_eq!(AnyKind::Resource.parent(), Some(AnyKind::Compound));
    assert_eq!(AnyKind::Scalar.parent(), Some(AnyKind::Value));
    assert_eq!(AnyKind::Value.parent(), None);
    assert!(AnyKind::Float.is_a(AnyKind::Value));
    assert!(!AnyKind::Array.is_a(AnyKind::Scalar));
}

#[test]
fn families_of_abstract_values() {
    assert!(Value::Any(AnyKind::Compound).may_be_array());
    assert!(!Value::Any(AnyKind::Scalar).may_be_array());
    assert!(Value::Any(AnyKind::Value)
        .families()
        .contains(TypeFamilies::NULL));
    assert!(Value::Type(ClassName::std_class()).families().is_empty());
}

#[test]
fn display_is_readable() {
    assert_eq!(Value::Int(-4).to_string(), "-4");
    assert_eq!(Value::Float(1.0).to_string(), "1.0");
    assert_eq!(Value::from("x").to_string(), "\"x\"");
    assert_eq!(
        Interval::new(1, 2).map(|i| Value::IntInterval(i).to_string()),
        Some("int[1, 2]".to_owned())
    );
    assert_eq!(Value::Any(AnyKind::Boolean).to_string(), "any boolean");
}
