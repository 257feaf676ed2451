use posre_core::CharClass;

use crate::sets::{ByteSet, WeightSet};

#[test]
fn byte_set_membership() {
    let mut set = ByteSet::new();
    set.insert_range(b'a', b'c');
    set.insert(b'z');
    assert!(set.contains(b'b'));
    assert!(!set.contains(b'd'));
    assert_eq!(set.len(), 4);
    assert_eq!(set.ranges(), vec![(b'a', b'c'), (b'z', b'z')]);
    assert!(!set.matches('ж'));
}

#[test]
fn complemented_byte_set_admits_wide_chars() {
    let mut set = ByteSet::new();
    set.insert_range(b'a', b'c');
    set.complement();
    assert!(set.is_negated());
    assert!(!set.matches('a'));
    assert!(set.matches('d'));
    assert!(set.matches('ж'));
    assert_eq!(set.len(), 253);
}

#[test]
fn byte_set_remove_after_complement() {
    let mut set = ByteSet::new();
    set.complement();
    set.remove(b'\n');
    assert!(!set.matches('\n'));
    assert!(set.matches('x'));
}

#[test]
fn weight_set_grows_in_both_directions() {
    let mut set = WeightSet::new();
    set.insert(1000);
    set.insert_range(10, 12);
    set.insert(70_000);
    assert!(set.contains_weight(10));
    assert!(set.contains_weight(12));
    assert!(!set.contains_weight(13));
    assert!(set.contains_weight(1000));
    assert!(set.contains_weight(70_000));
    assert!(!set.contains_weight(69_999));
    assert!(!set.contains_weight(5));
    assert!(!set.contains_weight(u32::MAX));
    assert_eq!(set.ranges(), vec![(10, 12), (1000, 1000), (70_000, 70_000)]);
}

#[test]
fn empty_weight_set_contains_nothing() {
    let set = WeightSet::new();
    assert!(!set.contains_weight(0));
    assert!(set.ranges().is_empty());
}

#[test]
fn weight_set_classes_are_deduplicated() {
    let mut set = WeightSet::new();
    set.add_class(CharClass::Alpha);
    set.add_class(CharClass::Alpha);
    set.add_class(CharClass::Digit);
    assert_eq!(set.classes(), &[CharClass::Alpha, CharClass::Digit]);
}

#[test]
fn weight_set_negation_flags() {
    let mut set = WeightSet::new();
    set.negate(true);
    assert!(set.is_negated());
    assert!(set.excludes_newline());
}
