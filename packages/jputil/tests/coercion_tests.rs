//! Tests for typed-array coercion

use jputil::{ElementKind, TypedArray, coerce_array, to_array_num, to_array_str};
use serde_json::json;

#[test]
fn test_number_arrays() {
    let value = json!([1.0, 2.0]);
    let coerced = coerce_array(&value, ElementKind::Number).expect("all elements are numbers");
    assert_eq!(coerced, TypedArray::Numbers(vec![1.0, 2.0]));
    assert_eq!(coerced.kind(), ElementKind::Number);

    assert_eq!(to_array_num(&json!([3, -1, 2.5])), Some(vec![3.0, -1.0, 2.5]));
}

#[test]
fn test_number_mismatch_returns_none() {
    assert_eq!(coerce_array(&json!([1.0, "x"]), ElementKind::Number), None);
    assert_eq!(to_array_num(&json!(["1", "2"])), None);
    assert_eq!(to_array_num(&json!([1, null])), None);
    assert_eq!(to_array_num(&json!([1, [2]])), None);
}

#[test]
fn test_string_arrays_preserve_order() {
    let value = json!(["b", "a", "c"]);
    let coerced = coerce_array(&value, ElementKind::String).expect("all elements are strings");
    assert_eq!(coerced.len(), 3);
    assert_eq!(coerced.into_strings(), Some(vec!["b", "a", "c"]));
}

#[test]
fn test_string_mismatch_returns_none() {
    assert_eq!(to_array_str(&json!(["a", 1])), None);
    assert_eq!(coerce_array(&json!([true]), ElementKind::String), None);
}

#[test]
fn test_non_arrays_never_coerce() {
    for value in [json!(null), json!(1), json!("abc"), json!({"a": 1}), json!(true)] {
        assert_eq!(coerce_array(&value, ElementKind::Number), None, "value {value}");
        assert_eq!(coerce_array(&value, ElementKind::String), None, "value {value}");
    }
}

#[test]
fn test_empty_array_coerces_to_either_kind() {
    let empty = json!([]);
    let numbers = coerce_array(&empty, ElementKind::Number).expect("empty array coerces");
    assert!(numbers.is_empty());
    assert_eq!(numbers.into_numbers(), Some(Vec::new()));
    let strings = coerce_array(&empty, ElementKind::String).expect("empty array coerces");
    assert!(strings.is_empty());
    assert_eq!(strings.into_numbers(), None);
}
