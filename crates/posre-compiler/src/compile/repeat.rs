//! Quantifiers and intervals.

use posre_bytecode::{Atom, DUP_MAX, Repeat};

use super::compiler::{Compiler, Prev};
use crate::Result;
use crate::error::{CompileError, CompileErrorKind};

impl Compiler<'_> {
    /// `*`: a literal in BRE when there is nothing to repeat.
    pub(super) fn star(&mut self, offset: usize) -> Result<()> {
        if !self.flags.extended && !matches!(self.prev, Prev::Atom(_) | Prev::Quantified(_)) {
            return self.literal('*', offset);
        }
        self.quantify(Repeat::ZeroOrMore, offset)
    }

    pub(super) fn quantify(&mut self, repeat: Repeat, offset: usize) -> Result<()> {
        self.apply_repeat(repeat, offset, false)
    }

    /// ERE `{`: a malformed interval is an ordinary `{`.
    pub(super) fn ere_interval(&mut self, offset: usize) -> Result<()> {
        match self.interval(offset)? {
            Some(repeat) => self.apply_repeat(repeat, offset, false),
            None => self.literal('{', offset),
        }
    }

    /// BRE `\{`: a malformed interval is an error.
    pub(super) fn bre_interval(&mut self, offset: usize) -> Result<()> {
        let repeat = self
            .interval(offset)?
            .ok_or(CompileError::new(offset, CompileErrorKind::BadInterval))?;
        self.apply_repeat(repeat, offset, true)
    }

    /// Parse `m}`, `m,}` or `m,n}` (with `\}` in BRE) after the opening brace.
    ///
    /// Returns `None` and leaves the cursor untouched when the text is not
    /// an interval at all; bounds above `DUP_MAX` or `m > n` are errors.
    fn interval(&mut self, offset: usize) -> Result<Option<Repeat>> {
        let save = self.pos;
        let Some(min) = self.number() else {
            return Ok(None);
        };
        let max = if self.eat(",") { self.number() } else { Some(min) };
        let close = if self.flags.extended { "}" } else { "\\}" };
        if !self.eat(close) {
            self.pos = save;
            return Ok(None);
        }

        let bad = || CompileError::new(offset, CompileErrorKind::BadInterval);
        let min = u16::try_from(min).ok().filter(|&m| m <= DUP_MAX).ok_or_else(bad)?;
        let repeat = match max {
            None => Repeat::AtLeast(min),
            Some(max) => {
                let max = u16::try_from(max)
                    .ok()
                    .filter(|&m| m <= DUP_MAX && m >= min)
                    .ok_or_else(bad)?;
                Repeat::Interval { min, max }
            }
        };
        Ok(Some(repeat))
    }

    /// Decimal digits at the cursor, saturating on overflow.
    fn number(&mut self) -> Option<u32> {
        let digits = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let value = self.rest()[..digits].bytes().fold(0u32, |acc, d| {
            acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
        });
        self.pos += digits;
        Some(value)
    }

    fn apply_repeat(&mut self, repeat: Repeat, offset: usize, bre_interval: bool) -> Result<()> {
        let bad = CompileError::new(offset, CompileErrorKind::BadRepetition);
        match self.prev {
            Prev::Start | Prev::ZeroWidth => Err(bad),
            Prev::Atom(index) => {
                let index = if self.insts[index].atom.literal_len().is_some_and(|len| len > 1) {
                    self.split_last_literal(index)
                } else {
                    index
                };
                self.set_repeat(index, repeat);
                self.prev = Prev::Quantified(index);
                Ok(())
            }
            Prev::Quantified(index) => {
                let current = self.insts[index].repeat;
                let interval =
                    |r: Repeat| matches!(r, Repeat::Interval { .. } | Repeat::AtLeast(_));
                if !self.flags.extended && (bre_interval || interval(current)) {
                    return Err(bad);
                }
                self.set_repeat(index, current.stack(repeat));
                Ok(())
            }
        }
    }

    /// Move the last character of a literal run into its own instruction
    /// and return that instruction's index.
    fn split_last_literal(&mut self, index: usize) -> usize {
        let head = &mut self.insts[index].atom;
        let tail = match head {
            Atom::LiteralString(s) => s.pop().map(Atom::Literal),
            Atom::LiteralStringFold(pairs) => pairs.pop().map(|(a, b)| Atom::LiteralFold(a, b)),
            _ => None,
        };
        let Some(tail) = tail else {
            return index;
        };

        let single = match &*head {
            Atom::LiteralString(s) if s.chars().count() == 1 => s.chars().next().map(Atom::Literal),
            Atom::LiteralStringFold(pairs) if pairs.len() == 1 => {
                pairs.first().map(|&(a, b)| Atom::LiteralFold(a, b))
            }
            _ => None,
        };
        if let Some(single) = single {
            *head = single;
        }
        self.emit(tail.into())
    }

    /// Set the repetition of an instruction; a group's end marker carries
    /// it to the start marker too.
    fn set_repeat(&mut self, index: usize, repeat: Repeat) {
        self.insts[index].repeat = repeat;
        if let Atom::GroupEnd(group) = self.insts[index].atom
            && let Some(&(start, _)) = self.groups.get(group as usize)
        {
            self.insts[start as usize].repeat = repeat;
        }
    }
}
