//! Bracket expressions (`[...]`).
//!
//! Parsing resolves every element to unique collation weights; lowering then
//! picks the representation:
//! - `Atom::Bracket` (256-bit byte set) when the adapter is byte-indexed and
//!   every explicit member fits in a byte. Classes are expanded eagerly.
//! - `Atom::BracketWeighted` otherwise. Classes stay symbolic and are
//!   evaluated through the adapter at match time.

mod lower;
mod parse;

use posre_bytecode::Atom;
use posre_core::Collation;

use crate::Result;
use crate::flags::CompileFlags;

use parse::BracketParser;

/// Compile the bracket expression whose `[` sits at byte offset `open`.
///
/// Returns the instruction atom and the offset just past the closing `]`.
pub(crate) fn compile_bracket(
    pattern: &str,
    open: usize,
    flags: CompileFlags,
    collation: &dyn Collation,
) -> Result<(Atom, usize)> {
    let parser = BracketParser::new(pattern, open, flags.ignore_case, collation);
    let (items, end) = parser.parse()?;
    let atom = lower::lower(&items, flags.newline_sensitive, collation);
    Ok((atom, end))
}
