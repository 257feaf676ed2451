use posre_core::Colors;

use crate::instructions::{Atom, Inst, Repeat};
use crate::program::{FirstByteMap, GroupSpan, Program, ProgramFlags};
use crate::sets::ByteSet;
use crate::{dump, format_inst};

#[test]
fn dump_group_loop() {
    let mut first = FirstByteMap::empty();
    first.insert(b'a');
    first.insert(b'c');
    let program = Program::new(
        vec![
            Inst::repeated(Atom::GroupStart(1), Repeat::ZeroOrMore),
            Atom::LiteralString("ab".into()).into(),
            Inst::repeated(Atom::GroupEnd(1), Repeat::ZeroOrMore),
            Atom::Literal('c').into(),
            Atom::EndOfProgram.into(),
        ],
        vec![
            GroupSpan { start: 0, end: 4 },
            GroupSpan { start: 0, end: 2 },
        ],
        first,
        ProgramFlags::default(),
    );

    insta::assert_snapshot!(dump(&program, Colors::OFF), @r#"
    [groups]
    #0  0..4
    #1  0..2

    [first]
    a c

    [code]
    0  open #1*
    1  str "ab"
    2  close #1*
    3  char 'c'
    4  end
    "#);
}

#[test]
fn format_negated_set() {
    let mut set = ByteSet::new();
    set.insert_range(b'a', b'c');
    set.complement();
    let inst = Inst::repeated(Atom::Bracket(Box::new(set)), Repeat::OneOrMore);
    assert_eq!(format_inst(&inst, Colors::OFF), "set [^a-c]+");
}

#[test]
fn format_alternation_markers() {
    assert_eq!(
        format_inst(&Atom::AltStart { next: 3 }.into(), Colors::OFF),
        "alt +3"
    );
    assert_eq!(
        format_inst(&Atom::AltStart { next: 0 }.into(), Colors::OFF),
        "alt end"
    );
    assert_eq!(
        format_inst(&Atom::AltEnd { group: 0 }.into(), Colors::OFF),
        "alt-done #0"
    );
}

#[test]
fn format_interval_on_fold_literal() {
    let inst = Inst::repeated(
        Atom::LiteralFold('a', 'A'),
        Repeat::Interval { min: 2, max: 3 },
    );
    assert_eq!(format_inst(&inst, Colors::OFF), "char~ 'a'|'A'{2,3}");
}

#[test]
fn colored_dump_wraps_markers() {
    let inst: Inst = Atom::GroupStart(2).into();
    assert_eq!(format_inst(&inst, Colors::ON), "\x1b[34mopen #2\x1b[0m");
}
