use posre_bytecode::FirstByteMap;
use posre_core::{CLocale, Utf8Locale};

use crate::{CompileFlags, compile};

fn first(pattern: &str, flags: CompileFlags) -> FirstByteMap {
    *compile(pattern, flags, &CLocale).unwrap().first_bytes()
}

fn bytes(pattern: &str) -> Vec<u8> {
    first(pattern, CompileFlags::ere()).iter().collect()
}

#[test]
fn literal_contributes_its_first_byte() {
    assert_eq!(bytes("abc"), vec![b'a']);
    assert_eq!(bytes("é"), vec![0xC3]);
}

#[test]
fn alternation_unions_branches() {
    assert_eq!(bytes("foo|bar|baz"), vec![b'b', b'f']);
    assert_eq!(bytes("(a|bc)d"), vec![b'a', b'b']);
}

#[test]
fn optional_prefix_forces_full_map() {
    assert!(first("a*b", CompileFlags::ere()).is_full());
    assert!(first("(ab)?c", CompileFlags::ere()).is_full());
    assert!(first("a{0,2}b", CompileFlags::ere()).is_full());
}

#[test]
fn anchors_and_back_references_force_full_map() {
    assert!(first("^a", CompileFlags::ere()).is_full());
    assert!(first(r"\<a", CompileFlags::ere()).is_full());
    assert!(first("", CompileFlags::ere()).is_full());
}

#[test]
fn required_group_looks_inside() {
    assert_eq!(bytes("(x|y)+z"), vec![b'x', b'y']);
    assert_eq!(bytes("()a"), vec![b'a']);
}

#[test]
fn empty_alternative_reaches_what_follows() {
    assert_eq!(bytes("(a|)b"), vec![b'a', b'b']);
}

#[test]
fn byte_set_maps_latin1_to_lead_bytes() {
    assert_eq!(bytes("[aé]"), vec![b'a', 0xC3]);
    assert!(first("[^a]", CompileFlags::ere()).is_full());
}

#[test]
fn case_folding_adds_both_cases() {
    let map = first("q", CompileFlags::ere().ignore_case(true));
    assert_eq!(map.iter().collect::<Vec<_>>(), vec![b'Q', b'q']);
}

#[test]
fn weighted_bracket_is_unconstrained() {
    let program = compile("[a-c]", CompileFlags::ere(), &Utf8Locale).unwrap();
    assert!(program.first_bytes().is_full());
}

#[test]
fn nul_collating_symbol() {
    let program = compile("[[.NUL.]]", CompileFlags::ere(), &CLocale).unwrap();
    assert_eq!(program.first_bytes().iter().collect::<Vec<_>>(), vec![0]);
}
