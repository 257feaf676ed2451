use crate::instructions::{Atom, Inst, Repeat};
use crate::program::{FirstByteMap, GroupSpan, Program, ProgramFlags};
use crate::verify::ProgramError;

fn program(insts: Vec<Inst>, groups: Vec<GroupSpan>) -> Program {
    Program::new(insts, groups, FirstByteMap::full(), ProgramFlags::default())
}

fn span(start: u32, end: u32) -> GroupSpan {
    GroupSpan { start, end }
}

#[test]
fn well_formed_program_verifies() {
    let p = program(
        vec![
            Inst::repeated(Atom::GroupStart(1), Repeat::ZeroOrMore),
            Atom::Literal('a').into(),
            Inst::repeated(Atom::GroupEnd(1), Repeat::ZeroOrMore),
            Atom::EndOfProgram.into(),
        ],
        vec![span(0, 3), span(0, 2)],
    );
    assert_eq!(p.verify(), Ok(()));
}

#[test]
fn missing_end_is_rejected() {
    let p = program(vec![Atom::Literal('a').into()], vec![span(0, 0)]);
    assert_eq!(p.verify(), Err(ProgramError::MissingEnd));
    let empty = program(vec![], vec![]);
    assert_eq!(empty.verify(), Err(ProgramError::MissingEnd));
}

#[test]
fn mismatched_group_repeat_is_rejected() {
    let p = program(
        vec![
            Inst::repeated(Atom::GroupStart(1), Repeat::ZeroOrMore),
            Atom::GroupEnd(1).into(),
            Atom::EndOfProgram.into(),
        ],
        vec![span(0, 2), span(0, 1)],
    );
    assert_eq!(p.verify(), Err(ProgramError::GroupRepeat(1)));
}

#[test]
fn swapped_group_markers_are_rejected() {
    let p = program(
        vec![
            Atom::GroupEnd(1).into(),
            Atom::GroupStart(1).into(),
            Atom::EndOfProgram.into(),
        ],
        vec![span(0, 2), span(1, 0)],
    );
    assert_eq!(p.verify(), Err(ProgramError::GroupMarkers(1)));
}

#[test]
fn dangling_alternative_is_rejected() {
    let p = program(
        vec![
            Atom::AltStart { next: 9 }.into(),
            Atom::Literal('a').into(),
            Atom::EndOfProgram.into(),
        ],
        vec![span(0, 2)],
    );
    assert_eq!(p.verify(), Err(ProgramError::DanglingAlternative(0)));
}

#[test]
fn unknown_backref_group_is_rejected() {
    let p = program(
        vec![Atom::BackRef(2).into(), Atom::EndOfProgram.into()],
        vec![span(0, 1)],
    );
    assert_eq!(p.verify(), Err(ProgramError::UnknownGroup(0, 2)));
}

#[test]
fn repeated_anchor_is_rejected() {
    let p = program(
        vec![
            Inst::repeated(Atom::LineStart, Repeat::ZeroOrMore),
            Atom::EndOfProgram.into(),
        ],
        vec![span(0, 1)],
    );
    assert_eq!(p.verify(), Err(ProgramError::RepeatedAnchor(0)));
}
