use yamltree::{Mapping, MappingAccess, Node, Scalar, Sequence};

use crate::helpers::*;

#[test]
fn test_json_round_trip_preserves_structure() {
    let doc = every_kind_doc();

    let json = serde_json::to_string(&doc).expect("serialize");
    let restored: Mapping = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, doc);
    assert_eq!(
        restored.folded_block_scalar("folded"),
        Some("folded text")
    );
}

#[test]
fn test_deserialized_duplicate_keys_collapse() {
    let entries = vec![
        (Node::from("a"), Node::from("1")),
        (Node::from("a"), Node::from("2")),
    ];
    let json = serde_json::to_string(&entries).expect("serialize");
    let mapping: Mapping = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping.string("a"), Some("2"));
}

#[test]
fn test_sequence_serializes_as_plain_list() {
    let sequence = Sequence::from_iter([Scalar::plain("x")]);
    let value = serde_json::to_value(&sequence).expect("serialize");
    assert!(value.is_array());
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_block_scalar_text_is_rebuilt_from_lines() {
    let json = r#"{"style":"FoldedBlock","value":"zzz","lines":["a","b"]}"#;
    let scalar: Scalar = serde_json::from_str(json).expect("deserialize");

    assert_eq!(scalar.value(), "a b");
    assert_eq!(scalar, Scalar::folded_block(["a", "b"]));
}

#[test]
fn test_plain_scalar_drops_lines() {
    let json = r#"{"style":"Plain","value":"text","lines":["x","y"]}"#;
    let scalar: Scalar = serde_json::from_str(json).expect("deserialize");

    assert!(scalar.lines().is_empty());
    assert_eq!(scalar.value(), "text");
}
