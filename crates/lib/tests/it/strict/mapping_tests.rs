use std::thread;

use yamltree::{Mapping, MappingAccess, Node, Scalar, StrictMapping};

use crate::helpers::*;

#[test]
fn test_example_scenario() {
    let doc = example_doc();
    let strict = StrictMapping::new(&doc);

    assert_eq!(strict.string("name").unwrap(), "eo");
    assert_not_found(strict.string("missing"), "missing", "String");

    let tags = strict.sequence("tags").unwrap();
    assert_eq!(tags, doc.sequence("tags").unwrap());

    // tags is a Sequence, not a Mapping
    assert_not_found(strict.mapping("tags"), "tags", "Mapping");
}

#[test]
fn test_missing_key_fails_for_every_accessor() {
    let doc = example_doc();
    let strict = doc.strict();

    assert_not_found(strict.value("missing"), "missing", "Node");
    assert_not_found(strict.mapping("missing"), "missing", "Mapping");
    assert_not_found(strict.sequence("missing"), "missing", "Sequence");
    assert_not_found(strict.string("missing"), "missing", "String");
    assert_not_found(
        strict.folded_block_scalar("missing"),
        "missing",
        "Folded Block Scalar",
    );
    assert_not_found(
        strict.literal_block_scalar("missing"),
        "missing",
        "Literal Block Scalar",
    );
    assert_not_found(strict.integer("missing"), "missing", "Integer");
    assert_not_found(strict.float("missing"), "missing", "Float");
    assert_not_found(strict.date("missing"), "missing", "Date");
    assert_not_found(strict.date_time("missing"), "missing", "DateTime");
}

#[test]
fn test_strict_agrees_with_plain_lookups() {
    let doc = every_kind_doc();
    let strict = doc.strict();

    for name in EVERY_KIND_KEYS.into_iter().chain(["missing"]) {
        assert_eq!(strict.value(name).ok(), doc.value(name));
        assert_eq!(strict.mapping(name).ok(), doc.mapping(name));
        assert_eq!(strict.sequence(name).ok(), doc.sequence(name));
        assert_eq!(strict.string(name).ok(), doc.string(name));
        assert_eq!(
            strict.folded_block_scalar(name).ok(),
            doc.folded_block_scalar(name)
        );
        assert_eq!(
            strict.literal_block_scalar(name).ok(),
            doc.literal_block_scalar(name)
        );
    }
}

#[test]
fn test_type_mismatch_is_node_not_found() {
    let doc = every_kind_doc();
    let strict = doc.strict();

    // same single error kind as a missing key
    assert_not_found(strict.mapping("sequence"), "sequence", "Mapping");
    assert_not_found(strict.sequence("mapping"), "mapping", "Sequence");
    assert_not_found(strict.string("folded"), "folded", "String");
    assert_not_found(
        strict.folded_block_scalar("string"),
        "string",
        "Folded Block Scalar",
    );
    assert_not_found(strict.integer("string"), "string", "Integer");
}

#[test]
fn test_string_and_node_keys_fail_identically() {
    let doc = example_doc();
    let strict = doc.strict();

    let by_str = strict.mapping("missing").unwrap_err().to_string();
    let by_node = strict.mapping(key("missing")).unwrap_err().to_string();
    let by_scalar = strict.mapping(Scalar::plain("missing")).unwrap_err().to_string();
    assert_eq!(by_str, by_node);
    assert_eq!(by_str, by_scalar);
}

#[test]
fn test_nested_values_are_not_wrapped() {
    let inner = Mapping::new().with("port", "8080");
    let doc = Mapping::new().with("server", inner.clone());
    let strict = doc.strict();

    let server = strict.mapping("server").unwrap();
    assert_eq!(server, &inner);
    assert!(std::ptr::eq(server, doc.mapping("server").unwrap()));

    // plain lookups on the nested mapping stay plain
    assert_eq!(server.string("host"), None);
    // strictness has to be asked for again
    assert_not_found(server.strict().string("host"), "host", "String");
    assert_eq!(server.strict().integer("port").unwrap(), 8080);
}

#[test]
fn test_keys_and_values_pass_through() {
    let doc = every_kind_doc();
    let strict = doc.strict();

    assert!(strict.keys().eq(doc.keys()));
    assert!(strict.values().eq(doc.values()));
    assert!(Mapping::new().strict().keys().next().is_none());
}

#[test]
fn test_decorator_does_not_change_the_mapping() {
    let doc = every_kind_doc();
    let before = doc.clone();

    let strict = doc.strict();
    let _ = strict.mapping("missing");
    let _ = strict.string("string");

    assert_eq!(doc, before);
}

#[test]
fn test_repeated_strict_lookups_are_stable() {
    let doc = example_doc();
    let strict = doc.strict();

    let first = strict.sequence("tags").unwrap();
    let second = strict.sequence("tags").unwrap();
    assert_eq!(first, second);

    let first_err = strict.string("missing").unwrap_err().to_string();
    let second_err = strict.string("missing").unwrap_err().to_string();
    assert_eq!(first_err, second_err);
}

#[test]
fn test_shared_across_threads() {
    let doc = every_kind_doc();
    let strict = doc.strict();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(move || {
                assert_eq!(strict.string("string").unwrap(), "plain text");
                assert!(strict.mapping("string").is_err());
                assert_eq!(
                    strict.value("mapping").map(Node::kind).unwrap(),
                    yamltree::NodeKind::Mapping
                );
            });
        }
    });
}
