//! Conservative leading-byte analysis.
//!
//! Every control transfer in a program points forward (alternative heads
//! chain forward, `AltEnd` jumps to its group's end marker, group markers
//! fall through), so the map of each instruction depends only on later
//! ones and a single backward pass computes them all.

use posre_bytecode::{Atom, FirstByteMap, GroupSpan, Inst};

pub(crate) fn first_bytes(insts: &[Inst], groups: &[GroupSpan]) -> FirstByteMap {
    let mut maps = vec![FirstByteMap::full(); insts.len()];
    for pc in (0..insts.len()).rev() {
        maps[pc] = entry(insts, groups, &maps, pc);
    }
    maps.first().copied().unwrap_or_default()
}

/// Bytes a match entering at `pc` may begin with.
fn entry(insts: &[Inst], groups: &[GroupSpan], maps: &[FirstByteMap], pc: usize) -> FirstByteMap {
    let at = |target: usize| maps.get(target).copied().unwrap_or_default();
    let inst = &insts[pc];

    let optional = inst.repeat.min() == 0;
    match &inst.atom {
        Atom::GroupEnd(_) | Atom::AltStart { next: 0 } => at(pc + 1),
        Atom::AltStart { next } => {
            let mut map = at(pc + 1);
            let target = pc + *next as usize;
            if !insts.get(target).is_some_and(|i| i.atom.is_alt_sentinel()) {
                map.union(&at(target));
            }
            map
        }
        Atom::AltEnd { group } => groups
            .get(*group as usize)
            .map_or_else(FirstByteMap::full, |span| at(span.end as usize)),
        _ if optional => FirstByteMap::full(),
        Atom::GroupStart(_) => at(pc + 1),
        Atom::Literal(c) => chars([*c]),
        Atom::LiteralFold(a, b) => chars([*a, *b]),
        Atom::LiteralString(s) => s.chars().next().map_or_else(FirstByteMap::full, |c| chars([c])),
        Atom::LiteralStringFold(pairs) => pairs
            .first()
            .map_or_else(FirstByteMap::full, |&(a, b)| chars([a, b])),
        Atom::Bracket(set) if !set.is_negated() => {
            let mut map = FirstByteMap::empty();
            for b in set.iter() {
                map.insert_char(char::from(b));
            }
            map
        }
        _ => FirstByteMap::full(),
    }
}

fn chars<const N: usize>(cs: [char; N]) -> FirstByteMap {
    let mut map = FirstByteMap::empty();
    for c in cs {
        map.insert_char(c);
    }
    map
}
