use yamltree::{Mapping, MappingAccess, Node, Scalar, ScalarStyle};

#[test]
fn test_folding_rule() {
    let folded = Scalar::folded_block([
        "This is a long",
        "paragraph.",
        "",
        "And a second",
        "one.",
    ]);

    assert_eq!(folded.style(), ScalarStyle::FoldedBlock);
    assert_eq!(folded.value(), "This is a long paragraph.\nAnd a second one.");
    assert_eq!(folded.lines().len(), 5);
}

#[test]
fn test_literal_keeps_lines() {
    let literal = Scalar::literal_block(["first", "", "third"]);
    assert_eq!(literal.value(), "first\n\nthird");

    let doc = Mapping::new().with("script", literal);
    assert_eq!(
        doc.literal_block_scalar("script"),
        Some(&["first".to_string(), String::new(), "third".to_string()][..])
    );
}

#[test]
fn test_scalar_sub_kinds_are_distinct_nodes() {
    let plain = Node::from("text");
    let folded = Node::from(Scalar::folded_block(["text"]));
    let literal = Node::from(Scalar::literal_block(["text"]));

    assert_ne!(plain, folded);
    assert_ne!(plain, literal);
    assert_ne!(folded, literal);

    // all three render the same text
    assert_eq!(plain.to_string(), "text");
    assert_eq!(folded.to_string(), "text");
    assert_eq!(literal.to_string(), "text");
}

#[test]
fn test_folded_keys_compare_by_text() {
    let stored = Scalar::folded_block(["a b"]);
    let lookup = Scalar::folded_block(["a", "b"]);
    assert_eq!(stored, lookup);

    let doc = Mapping::new().with(stored, "found");
    assert_eq!(doc.string(lookup), Some("found"));
    // still not a plain key
    assert_eq!(doc.string("a b"), None);
}
