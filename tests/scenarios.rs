//! End-to-end lookups against JSON documents.

#![cfg(feature = "json")]

use keypath::{decode_at, get, get_optional, DecodeError, KeyPath, Node, OptionalKeyPath};
use pretty_assertions::assert_eq;
use serde_json::json;

fn string(node: &Node) -> Result<String, DecodeError> {
    node.as_str()
        .map(str::to_string)
        .ok_or_else(|| DecodeError::type_mismatch("string", node))
}

#[test]
fn resolves_string_leaf() {
    let root = Node::from(json!({"a": {"b": "hello"}}));
    let value = decode_at(&root, &KeyPath::from(["a", "b"]), string).expect("decode");
    assert_eq!(value, "hello");
}

#[test]
fn reports_missing_key_with_parent_context() {
    let root = Node::from(json!({"a": {}}));
    let err = get(&root, &KeyPath::from(["a", "b"])).unwrap_err();

    match &err {
        DecodeError::MissingKey { key, metadata } => {
            assert_eq!(key, "b");
            assert_eq!(metadata.path, vec!["a".to_string()]);
            assert_eq!(metadata.object, Node::from(json!({})));
            assert_eq!(metadata.root, root);
        }
        other => panic!("expected MissingKey, got {:?}", other),
    }
    assert_eq!(err.to_string(), "missing key \"b\" at a");
}

#[test]
fn optional_tail_absent_is_no_value() {
    let root = Node::from(json!({"a": {}}));
    let path = OptionalKeyPath::new().required("a").optional("b");
    assert_eq!(get_optional(&root, &path).expect("no failure"), None);
}

#[test]
fn nested_decode_reports_full_path_and_root() {
    let root = Node::from(json!({"x": {"y": {"z": 1}}}));

    let err = decode_at(&root, &KeyPath::from(["x", "y"]), |inner| {
        decode_at(inner, &KeyPath::from("z"), string)
    })
    .unwrap_err();

    assert_eq!(err.path(), ["x", "y", "z"]);
    assert_eq!(err.metadata().root, root);
    assert_eq!(err.metadata().object, Node::from(1));
    assert_eq!(
        err.to_string(),
        "type mismatch at x.y.z: expected string, got number"
    );
}

#[test]
fn optional_path_through_leaf_is_type_mismatch() {
    let root = Node::from(json!({"a": "text"}));
    let path = OptionalKeyPath::new().required("a").optional("b");
    let err = get_optional(&root, &path).unwrap_err();

    match err {
        DecodeError::TypeMismatch { expected, actual, metadata } => {
            assert_eq!(expected, "object");
            assert_eq!(actual, keypath::NodeKind::String);
            assert_eq!(metadata.path, vec!["a".to_string()]);
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn lookup_does_not_descend_into_arrays() {
    let root = Node::from(json!({"items": [{"id": 1}]}));
    let err = get(&root, &KeyPath::from(["items", "0"])).unwrap_err();
    assert!(matches!(err, DecodeError::TypeMismatch { actual: keypath::NodeKind::Array, .. }));
}

#[test]
fn repeated_resolution_is_independent() {
    let root = Node::from(json!({"a": {"b": 1}}));
    let path = KeyPath::from(["a", "b"]);
    let first = get(&root, &path).expect("first");
    let second = get(&root, &path).expect("second");
    assert_eq!(first, second);
    // the tree is left as it was
    assert_eq!(root, Node::from(json!({"a": {"b": 1}})));
}
