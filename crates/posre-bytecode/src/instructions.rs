//! Instruction definitions.
//!
//! Every instruction is an atom (what to match or which marker to record)
//! paired with a repetition kind. Anchors and markers always carry
//! [`Repeat::Once`], except group markers, which carry the repetition of the
//! parenthesized sub-expression on both their start and end marker.

use crate::sets::{ByteSet, WeightSet};

/// Largest bound accepted in an interval `{m,n}`.
pub const DUP_MAX: u16 = 255;

/// Repetition kind attached to an instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    Once,
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
    /// `{m,n}`; `{m}` is `{m,m}`.
    Interval { min: u16, max: u16 },
    /// `{m,}`: at least `m`, unbounded.
    AtLeast(u16),
}

impl Repeat {
    pub fn min(self) -> u32 {
        match self {
            Repeat::Once | Repeat::OneOrMore => 1,
            Repeat::ZeroOrMore | Repeat::ZeroOrOne => 0,
            Repeat::Interval { min, .. } | Repeat::AtLeast(min) => min as u32,
        }
    }

    /// Upper bound, `None` when unbounded.
    pub fn max(self) -> Option<u32> {
        match self {
            Repeat::Once | Repeat::ZeroOrOne => Some(1),
            Repeat::ZeroOrMore | Repeat::OneOrMore | Repeat::AtLeast(_) => None,
            Repeat::Interval { max, .. } => Some(max as u32),
        }
    }

    #[inline]
    pub fn is_once(self) -> bool {
        self == Repeat::Once
    }

    /// Whether `count` repetitions leave room for another one.
    #[inline]
    pub fn below_max(self, count: u32) -> bool {
        self.max().is_none_or(|max| count < max)
    }

    /// Precedence used when quantifiers are stacked on one atom.
    ///
    /// `*` > `?` > `+` > interval.
    fn rank(self) -> u8 {
        match self {
            Repeat::Once => 0,
            Repeat::Interval { .. } | Repeat::AtLeast(_) => 1,
            Repeat::OneOrMore => 2,
            Repeat::ZeroOrOne => 3,
            Repeat::ZeroOrMore => 4,
        }
    }

    /// Combine an already-applied repetition with a later quantifier.
    ///
    /// The higher-precedence kind survives; on equal rank the first applied wins.
    pub fn stack(self, later: Repeat) -> Repeat {
        if later.rank() > self.rank() { later } else { self }
    }

    /// Suffix as written in pattern syntax (`*`, `{2,}`, ...).
    pub fn suffix(self) -> String {
        match self {
            Repeat::Once => String::new(),
            Repeat::ZeroOrMore => "*".to_string(),
            Repeat::OneOrMore => "+".to_string(),
            Repeat::ZeroOrOne => "?".to_string(),
            Repeat::Interval { min, max } if min == max => format!("{{{min}}}"),
            Repeat::Interval { min, max } => format!("{{{min},{max}}}"),
            Repeat::AtLeast(min) => format!("{{{min},}}"),
        }
    }
}

/// Flavor of a zero-width word assertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordBoundary {
    /// `\<`
    Start,
    /// `\>`
    End,
    /// `\b`
    Boundary,
    /// `\B`
    NotBoundary,
}

/// What an instruction matches or records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Atom {
    Literal(char),
    /// Either of two case variants.
    LiteralFold(char, char),
    /// A coalesced run of ordinary characters (never repeated).
    LiteralString(String),
    /// A coalesced run of case-folded characters.
    LiteralStringFold(Vec<(char, char)>),
    AnyChar,
    AnyCharExceptNewline,
    /// Byte-indexed bracket set (fast path).
    Bracket(Box<ByteSet>),
    /// Collation-weight-indexed bracket set.
    BracketWeighted(Box<WeightSet>),
    GroupStart(u16),
    GroupEnd(u16),
    BackRef(u16),
    BackRefFold(u16),
    LineStart,
    LineEnd,
    WordBoundary(WordBoundary),
    /// Head of one alternative; `next` is the relative distance to the
    /// following alternative's head. `next == 0` terminates the chain.
    AltStart { next: u32 },
    /// Tail of a non-final alternative; resumes at the end marker of `group`.
    AltEnd { group: u16 },
    EndOfProgram,
}

impl Atom {
    /// Zero-width assertions that may not carry a repetition.
    pub fn is_anchor(&self) -> bool {
        matches!(
            self,
            Atom::LineStart | Atom::LineEnd | Atom::WordBoundary(_)
        )
    }

    /// Atoms that consume exactly one character per repetition.
    pub fn is_single_char(&self) -> bool {
        matches!(
            self,
            Atom::Literal(_)
                | Atom::LiteralFold(..)
                | Atom::AnyChar
                | Atom::AnyCharExceptNewline
                | Atom::Bracket(_)
                | Atom::BracketWeighted(_)
        )
    }

    /// Number of characters in a literal run, if this is one.
    pub fn literal_len(&self) -> Option<usize> {
        match self {
            Atom::Literal(_) | Atom::LiteralFold(..) => Some(1),
            Atom::LiteralString(s) => Some(s.chars().count()),
            Atom::LiteralStringFold(pairs) => Some(pairs.len()),
            _ => None,
        }
    }

    /// The sentinel that closes an alternative chain.
    #[inline]
    pub fn is_alt_sentinel(&self) -> bool {
        matches!(self, Atom::AltStart { next: 0 })
    }
}

/// One instruction of a compiled program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inst {
    pub atom: Atom,
    pub repeat: Repeat,
}

impl Inst {
    pub fn new(atom: Atom) -> Self {
        Self {
            atom,
            repeat: Repeat::Once,
        }
    }

    pub fn repeated(atom: Atom, repeat: Repeat) -> Self {
        Self { atom, repeat }
    }
}

impl From<Atom> for Inst {
    fn from(atom: Atom) -> Self {
        Inst::new(atom)
    }
}
