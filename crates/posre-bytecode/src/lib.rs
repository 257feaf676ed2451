//! Instruction set and compiled program format for posre.
//!
//! This crate contains:
//! - Instruction definitions (`Atom`, `Repeat`, `Inst`)
//! - Bracket sets (`ByteSet` fast path, `WeightSet` collation path)
//! - The immutable `Program` with its capture table and first-byte map
//! - A human-readable `dump` for debugging and snapshot tests

mod dump;
mod instructions;
mod program;
mod sets;
mod verify;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod sets_tests;
#[cfg(test)]
mod verify_tests;

pub use dump::{dump, format_inst};
pub use instructions::{Atom, DUP_MAX, Inst, Repeat, WordBoundary};
pub use program::{FirstByteMap, GroupSpan, Program, ProgramFlags};
pub use sets::{ByteSet, WeightSet};
pub use verify::ProgramError;
