//! Lowering parsed bracket members to a set representation.

use posre_bytecode::{Atom, ByteSet, WeightSet};
use posre_core::Collation;

use super::parse::BracketItems;

pub(super) fn lower(
    items: &BracketItems,
    newline_sensitive: bool,
    collation: &dyn Collation,
) -> Atom {
    let fits_in_byte = items.ranges.iter().all(|&(_, hi)| hi <= 0xFF);
    if collation.byte_indexed() && fits_in_byte {
        Atom::Bracket(Box::new(byte_set(items, newline_sensitive, collation)))
    } else {
        Atom::BracketWeighted(Box::new(weight_set(items, newline_sensitive)))
    }
}

fn byte_set(items: &BracketItems, newline_sensitive: bool, collation: &dyn Collation) -> ByteSet {
    let mut set = ByteSet::new();
    for &(lo, hi) in &items.ranges {
        set.insert_range(lo as u8, hi as u8);
    }
    for &class in &items.classes {
        for b in 0..=u8::MAX {
            if collation.is_class(class, char::from(b)) {
                set.insert(b);
            }
        }
    }
    if items.negated {
        set.complement();
        if newline_sensitive {
            set.remove(b'\n');
        }
    }
    set
}

fn weight_set(items: &BracketItems, newline_sensitive: bool) -> WeightSet {
    let mut set = WeightSet::new();
    for &(lo, hi) in &items.ranges {
        set.insert_range(lo, hi);
    }
    for &class in &items.classes {
        set.add_class(class);
    }
    if items.negated {
        set.negate(newline_sensitive);
    }
    set
}
