//! Tests for property key listing

use geojson::JsonObject;
use serde_json::json;

use crate::input::{list_properties, PropertyInspector};

fn object(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

#[test]
fn test_union_is_sorted_and_distinct() {
    let features = vec![object(json!({"a": 1, "b": 2})), object(json!({"b": 3, "c": 4}))];
    assert_eq!(list_properties(&features), vec!["a", "b", "c"]);
}

#[test]
fn test_empty_feature_list() {
    let features: Vec<JsonObject> = Vec::new();
    assert!(list_properties(&features).is_empty());
}

#[test]
fn test_feature_without_keys_contributes_nothing() {
    let features = vec![object(json!({})), object(json!({"name": "x"})), object(json!({}))];
    assert_eq!(list_properties(&features), vec!["name"]);
}

#[test]
fn test_ordering_is_bytewise() {
    let features = vec![object(json!({"b": 0, "B": 0, "a": 0, "_id": 0}))];
    assert_eq!(list_properties(&features), vec!["B", "_id", "a", "b"]);
}

#[test]
fn test_report_format() {
    let mut inspector = PropertyInspector::new();
    inspector.add(&object(json!({"height": 12, "elevation": 3})));

    assert_eq!(inspector.report(), "Available properties:\n  - elevation\n  - height\n");
}

#[test]
fn test_report_with_no_keys() {
    assert_eq!(PropertyInspector::new().report(), "Available properties:\n");
}
