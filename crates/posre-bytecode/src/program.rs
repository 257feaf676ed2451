//! Compiled program: instruction stream, capture table, first-byte map.

use crate::instructions::Inst;

/// Instruction indices of a group's start and end markers.
///
/// Group 0 spans the whole program: `start` is 0 and `end` is the index of
/// the `EndOfProgram` instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupSpan {
    pub start: u32,
    pub end: u32,
}

/// Conservative set of bytes a match may begin with.
///
/// An unset bit proves no match starts at that byte; a set bit proves nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirstByteMap {
    bits: [u64; 4],
}

impl FirstByteMap {
    pub fn empty() -> Self {
        Self { bits: [0; 4] }
    }

    /// Map admitting every byte (and the empty match at end of subject).
    pub fn full() -> Self {
        Self {
            bits: [u64::MAX; 4],
        }
    }

    #[inline]
    pub fn insert(&mut self, b: u8) {
        self.bits[(b >> 6) as usize] |= 1 << (b & 63);
    }

    /// Add the first UTF-8 byte of `c`.
    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert(c.encode_utf8(&mut buf).as_bytes()[0]);
    }

    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        self.bits[(b >> 6) as usize] & (1 << (b & 63)) != 0
    }

    pub fn union(&mut self, other: &FirstByteMap) {
        for (a, b) in self.bits.iter_mut().zip(other.bits.iter()) {
            *a |= *b;
        }
    }

    pub fn is_full(&self) -> bool {
        self.bits.iter().all(|&w| w == u64::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=255u8).filter(|&b| self.contains(b))
    }
}

impl Default for FirstByteMap {
    fn default() -> Self {
        Self::full()
    }
}

/// Compile-time facts the matcher needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgramFlags {
    pub ignore_case: bool,
    pub newline_sensitive: bool,
    pub no_capture: bool,
    /// The program begins with a hard `^`: only the first position can match.
    pub anchored: bool,
}

/// Immutable result of compiling one pattern.
///
/// Holds no reference into any subject, so one program can serve any number
/// of concurrent match calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    insts: Vec<Inst>,
    groups: Vec<GroupSpan>,
    first_bytes: FirstByteMap,
    flags: ProgramFlags,
}

impl Program {
    pub fn new(
        insts: Vec<Inst>,
        groups: Vec<GroupSpan>,
        first_bytes: FirstByteMap,
        flags: ProgramFlags,
    ) -> Self {
        Self {
            insts,
            groups,
            first_bytes,
            flags,
        }
    }

    pub fn insts(&self) -> &[Inst] {
        &self.insts
    }

    #[inline]
    pub fn inst(&self, pc: usize) -> Option<&Inst> {
        self.insts.get(pc)
    }

    pub fn len(&self) -> usize {
        self.insts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insts.is_empty()
    }

    /// Capture table, indexed by group number (0 = whole match).
    pub fn groups(&self) -> &[GroupSpan] {
        &self.groups
    }

    #[inline]
    pub fn group(&self, index: u16) -> Option<GroupSpan> {
        self.groups.get(index as usize).copied()
    }

    /// Highest group index.
    pub fn nsub(&self) -> usize {
        self.groups.len().saturating_sub(1)
    }

    pub fn first_bytes(&self) -> &FirstByteMap {
        &self.first_bytes
    }

    pub fn flags(&self) -> ProgramFlags {
        self.flags
    }
}
