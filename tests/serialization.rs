//! Serde shapes of paths and failure context.

#![cfg(all(feature = "serde", feature = "json"))]

use keypath::{get, KeyPath, Metadata, Node, OptionalKeyPath};
use serde_json::json;

#[test]
fn key_path_is_a_plain_array() {
    let path = KeyPath::from(["a", "b"]);
    assert_eq!(serde_json::to_value(&path).expect("serialize"), json!(["a", "b"]));

    let back: KeyPath = serde_json::from_value(json!(["a", "b"])).expect("deserialize");
    assert_eq!(back, path);
}

#[test]
fn optional_key_path_keeps_flags() {
    let path = OptionalKeyPath::new().required("a").optional("b");
    let value = serde_json::to_value(&path).expect("serialize");
    assert_eq!(
        value,
        json!([{"key": "a", "is_required": true}, {"key": "b", "is_required": false}])
    );
    let back: OptionalKeyPath = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, path);
}

#[test]
fn failure_context_serializes_as_json_document() {
    let root = Node::from(json!({"a": {"n": 1}}));
    let err = get(&root, &KeyPath::from(["a", "b"])).unwrap_err();

    let value = serde_json::to_value(err.metadata()).expect("serialize");
    assert_eq!(
        value,
        json!({"path": ["a"], "object": {"n": 1}, "root": {"a": {"n": 1}}})
    );

    let back: Metadata = serde_json::from_value(value).expect("deserialize");
    assert_eq!(&back, err.metadata());
}
