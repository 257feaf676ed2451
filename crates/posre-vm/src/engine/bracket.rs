//! Runtime bracket membership.

use posre_bytecode::{Atom, WeightSet};
use posre_core::Collation;

/// Match one bracket instruction at byte offset `pos`.
///
/// Decodes the next character through the adapter and returns the offset
/// just past it when it is a member. Returns `None` at end of subject, for
/// non-members, and for atoms that are not brackets.
pub fn match_bracket(
    atom: &Atom,
    subject: &str,
    pos: usize,
    collation: &dyn Collation,
) -> Option<usize> {
    let (c, width) = collation.decode(subject, pos)?;
    let member = match atom {
        Atom::Bracket(set) => set.matches(c),
        Atom::BracketWeighted(set) => weighted_member(set, c, collation),
        _ => false,
    };
    member.then_some(pos + width)
}

fn weighted_member(set: &WeightSet, c: char, collation: &dyn Collation) -> bool {
    let listed = set.contains_weight(collation.unique_weight(c))
        || set.classes().iter().any(|&class| collation.is_class(class, c));
    if set.is_negated() {
        !listed && !(c == '\n' && set.excludes_newline())
    } else {
        listed
    }
}
