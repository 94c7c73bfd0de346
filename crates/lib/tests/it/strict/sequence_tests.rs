use yamltree::{Mapping, MappingAccess, Scalar, Sequence, SequenceAccess, StrictSequence};

use crate::helpers::*;

fn mixed() -> Sequence {
    Sequence::new()
        .with(Mapping::new().with("k", "v"))
        .with(Sequence::from_iter(["nested"]))
        .with("7")
        .with(Scalar::folded_block(["folded", "lines"]))
}

#[test]
fn test_present_items_come_back_unchanged() {
    let sequence = mixed();
    let strict = StrictSequence::new(&sequence);

    assert_eq!(strict.mapping(0).unwrap(), sequence.mapping(0).unwrap());
    assert!(std::ptr::eq(
        strict.sequence(1).unwrap(),
        sequence.sequence(1).unwrap()
    ));
    assert_eq!(strict.string(2).unwrap(), "7");
    assert_eq!(strict.integer(2).unwrap(), 7);
    assert_eq!(strict.folded_block_scalar(3).unwrap(), "folded lines");
}

#[test]
fn test_absent_items_fail_with_index() {
    let sequence = mixed();
    let strict = sequence.strict();

    assert_not_found(strict.value(9), "[9]", "Node");
    assert_not_found(strict.mapping(1), "[1]", "Mapping");
    assert_not_found(strict.sequence(0), "[0]", "Sequence");
    assert_not_found(strict.string(3), "[3]", "String");
    assert_not_found(strict.folded_block_scalar(2), "[2]", "Folded Block Scalar");
    assert_not_found(strict.literal_block_scalar(3), "[3]", "Literal Block Scalar");
    assert_not_found(strict.float(0), "[0]", "Float");
    assert_not_found(strict.date(2), "[2]", "Date");
    assert_not_found(strict.date_time(2), "[2]", "DateTime");
}

#[test]
fn test_values_pass_through() {
    let sequence = mixed();
    let strict = sequence.strict();

    assert!(strict.values().eq(sequence.values()));
    assert_eq!(strict.len(), 4);
    assert!(Sequence::new().strict().is_empty());
}

#[test]
fn test_strict_sequence_from_strict_mapping() {
    let doc = example_doc();

    let tags = doc.strict().sequence("tags").unwrap();
    assert_eq!(tags.strict().string(1).unwrap(), "b");
    assert_not_found(tags.strict().string(2), "[2]", "String");
}
