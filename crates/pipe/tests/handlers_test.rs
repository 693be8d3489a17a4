//! Integration tests for the built-in handlers.

use chrono::{TimeZone, Utc};
use nebula_pipe::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn json(value: serde_json::Value) -> Option<Value> {
    Value::from_json(value)
}

// ============================================================================
// BUILD
// ============================================================================

#[rstest]
#[case(json!(4), json!(4))]
#[case(json!(5), json!(null))]
#[case(json!("4"), json!(null))]
#[case(json!(null), json!(null))]
fn build_keeps_valid_values_only(#[case] input: serde_json::Value, #[case] expected: serde_json::Value) {
    let even = build(|v| v.as_i64().is_some_and(|n| n % 2 == 0), None, None);
    assert_eq!(to_json(&even.call(json(input)).unwrap()), expected);
}

#[test]
fn build_converts_invalid_input() {
    let even = build(
        |v| v.as_i64().is_some_and(|n| n % 2 == 0),
        Some(Box::new(|v: Option<Value>| v.and(Some(Value::Int(0))))),
        None,
    );
    assert_eq!(even.call(Some(Value::Int(3))).unwrap(), Some(Value::Int(0)));
    assert_eq!(even.call(None).unwrap(), None);
}

// ============================================================================
// SCALARS
// ============================================================================

#[test]
fn string_trims_by_default() {
    assert_eq!(string().call(Some("  hi ".into())).unwrap(), Some("hi".into()));
    let raw = string_with(StringOptions::new().with_trim(false));
    assert_eq!(raw.call(Some("  hi ".into())).unwrap(), Some("  hi ".into()));
    assert_eq!(string().call(Some(Value::Int(1))).unwrap(), None);
}

#[rstest]
#[case(Value::from("12"), Some(Value::Int(12)))]
#[case(Value::from("12.7"), Some(Value::Int(12)))]
#[case(Value::from("x12"), None)]
#[case(Value::Float(-2.5), Some(Value::Int(-2)))]
fn int_conversion(#[case] input: Value, #[case] expected: Option<Value>) {
    let handler = int_with(IntOptions::new().with_try_convert(true));
    assert_eq!(handler.call(Some(input)).unwrap(), expected);
}

#[test]
fn float_fixed_rounds_to_digits() {
    let handler = float_with(FloatOptions::new().with_fixed(2));
    assert_eq!(handler.call(Some(Value::Float(1.233333))).unwrap(), Some(Value::Float(1.23)));
}

#[test]
fn float_converts_then_rounds() {
    let handler = float_with(FloatOptions::new().with_try_convert(true).with_fixed(1));
    assert_eq!(handler.call(Some("3.14 m".into())).unwrap(), Some(Value::Float(3.1)));
    assert_eq!(handler.call(Some("m".into())).unwrap(), None);
}

#[test]
fn date_handler_reads_strings_when_converting() {
    let handler = date_with(DateOptions::new().with_try_convert(true));
    let expected = Utc.with_ymd_and_hms(2012, 12, 12, 0, 0, 0).unwrap();
    assert_eq!(handler.call(Some("2012-12-12".into())).unwrap(), Some(Value::Date(expected)));
    assert_eq!(date().call(Some("2012-12-12".into())).unwrap(), None);
}

#[rstest]
#[case(json!("yes"), json!(true))]
#[case(json!(""), json!(false))]
#[case(json!(0), json!(false))]
#[case(json!(null), json!(false))]
fn boolean_truthiness(#[case] input: serde_json::Value, #[case] expected: serde_json::Value) {
    assert_eq!(to_json(&boolean().call(json(input)).unwrap()), expected);
}

// ============================================================================
// CONSTRAINTS
// ============================================================================

#[rstest]
#[case(9, None)]
#[case(10, Some(10))]
#[case(14, Some(14))]
fn min_is_inclusive(#[case] input: i64, #[case] expected: Option<i64>) {
    assert_eq!(min(10).call(Some(Value::Int(input))).unwrap(), expected.map(Value::Int));
}

#[rstest]
#[case(9, Some(9))]
#[case(10, None)]
#[case(14, None)]
fn max_is_exclusive(#[case] input: i64, #[case] expected: Option<i64>) {
    assert_eq!(max(10).call(Some(Value::Int(input))).unwrap(), expected.map(Value::Int));
}

#[test]
fn range_across_kinds_is_absent() {
    assert_eq!(min(10).call(Some("20".into())).unwrap(), None);
    assert_eq!(max("m").call(Some("a".into())).unwrap(), Some("a".into()));
}

#[test]
fn lengths_count_chars_and_items() {
    assert_eq!(min_length(2).call(Some("éé".into())).unwrap(), Some("éé".into()));
    assert_eq!(max_length(1).call(json(json!([1, 2]))).unwrap(), None);
    assert_eq!(max_length(3).call(Some(Value::Int(1))).unwrap(), None);
}

#[test]
fn includes_checks_membership() {
    let handler = includes(Some(vec![Value::from("a"), Value::from("b")]));
    assert_eq!(handler.call(Some("b".into())).unwrap(), Some("b".into()));
    assert_eq!(handler.call(Some("c".into())).unwrap(), None);
    assert_eq!(includes(None).call(Some("c".into())).unwrap(), Some("c".into()));
}

#[test]
fn regex_matches_text() {
    let handler = regex_str(r"^\d{3}$").unwrap();
    assert_eq!(handler.call(Some("123".into())).unwrap(), Some("123".into()));
    assert_eq!(handler.call(Some(Value::Int(123))).unwrap(), Some(Value::Int(123)));
    assert_eq!(handler.call(Some("1234".into())).unwrap(), None);
    assert!(matches!(regex_str("[").unwrap_err(), ConfigError::InvalidPattern(_)));
}

#[test]
fn def_fills_absence_only() {
    assert_eq!(def(1).call(None).unwrap(), Some(Value::Int(1)));
    assert_eq!(def(1).call(Some(Value::Int(2))).unwrap(), Some(Value::Int(2)));
}

// ============================================================================
// ARRAYS
// ============================================================================

#[test]
fn array_removes_absent_items() {
    let handler = array_with(
        ArrayOptions::new().with_remove_absent(true),
        [int_with(IntOptions::new().with_try_convert(true))],
    );
    let output = handler.call(json(json!([1, 2, null, 4, "5", "s", 8]))).unwrap();
    assert_eq!(to_json(&output), json!([1, 2, 4, 5, 8]));
}

#[test]
fn array_items_pipeline_under_forward() {
    let items = forward([int_with(IntOptions::new().with_try_convert(true)), def(100)]);
    let output = array([items]).call(json(json!([1, null, "s"]))).unwrap();
    assert_eq!(to_json(&output), json!([1, 100, 100]));
}

#[test]
fn array_of_objects_projects_each_item() {
    let item = project([("id", Field::at(["id"], int()))]);
    let output = array([item]).call(json(json!([{ "id": 1, "x": 0 }, { "id": "2" }]))).unwrap();
    assert_eq!(to_json(&output), json!([{ "id": 1 }, { "id": null }]));
}
