//! Literals, `.`, brackets, escapes, anchors and back-references.

use posre_bytecode::{Atom, Repeat, WordBoundary};

use super::compiler::{Compiler, Prev};
use crate::Result;
use crate::bracket::compile_bracket;
use crate::error::{CompileError, CompileErrorKind};

/// Longest run of characters coalesced into one literal instruction.
const MAX_LITERAL_RUN: usize = 255;

impl Compiler<'_> {
    pub(super) fn escape(&mut self, offset: usize) -> Result<()> {
        let Some(c) = self.bump() else {
            return Err(CompileError::new(offset, CompileErrorKind::TrailingBackslash));
        };

        let basic = !self.flags.extended;
        match c {
            '(' if basic => self.open_group(offset),
            ')' if basic => self.close_group(offset),
            '{' if basic => self.bre_interval(offset),
            '|' if basic => {
                self.alternate();
                Ok(())
            }
            '+' if basic => self.quantify(Repeat::OneOrMore, offset),
            '?' if basic => self.quantify(Repeat::ZeroOrOne, offset),
            '1'..='9' => self.back_reference(c as u16 - '0' as u16, offset),
            '<' => self.word_boundary(WordBoundary::Start),
            '>' => self.word_boundary(WordBoundary::End),
            'b' => self.word_boundary(WordBoundary::Boundary),
            'B' => self.word_boundary(WordBoundary::NotBoundary),
            _ => self.literal(c, offset),
        }
    }

    /// Reject a consuming atom after an ERE `$` in the same alternative.
    pub(super) fn check_after_dollar(&self, offset: usize) -> Result<()> {
        if self.flags.extended && self.scope().dollar.is_some() {
            return Err(CompileError::new(offset, CompileErrorKind::AnchorNotLast));
        }
        Ok(())
    }

    fn push_atom(&mut self, atom: Atom) {
        let index = self.emit(atom.into());
        self.prev = Prev::Atom(index);
    }

    pub(super) fn literal(&mut self, c: char, offset: usize) -> Result<()> {
        self.check_after_dollar(offset)?;

        if let Prev::Atom(index) = self.prev
            && index + 1 == self.insts.len()
            && self.extend_literal(index, c)
        {
            return Ok(());
        }

        let atom = if self.flags.ignore_case {
            let (a, b) = self.fold_pair(c);
            Atom::LiteralFold(a, b)
        } else {
            Atom::Literal(c)
        };
        self.push_atom(atom);
        Ok(())
    }

    fn fold_pair(&self, c: char) -> (char, char) {
        (c, self.collation.opposite_case(c).unwrap_or(c))
    }

    /// Append `c` to the literal run at `index`, if that run can take it.
    fn extend_literal(&mut self, index: usize, c: char) -> bool {
        let fold = self.flags.ignore_case;
        let pair = self.fold_pair(c);
        let inst = &mut self.insts[index];
        if !inst.repeat.is_once()
            || inst
                .atom
                .literal_len()
                .is_none_or(|len| len >= MAX_LITERAL_RUN)
        {
            return false;
        }

        let promoted = match &inst.atom {
            Atom::Literal(first) if !fold => {
                Some(Atom::LiteralString([*first, c].into_iter().collect()))
            }
            Atom::LiteralFold(a, b) if fold => Some(Atom::LiteralStringFold(vec![(*a, *b), pair])),
            _ => None,
        };
        if let Some(atom) = promoted {
            inst.atom = atom;
            return true;
        }

        match &mut inst.atom {
            Atom::LiteralString(s) if !fold => s.push(c),
            Atom::LiteralStringFold(pairs) if fold => pairs.push(pair),
            _ => return false,
        }
        true
    }

    pub(super) fn any_char(&mut self, offset: usize) -> Result<()> {
        self.check_after_dollar(offset)?;
        let atom = if self.flags.newline_sensitive {
            Atom::AnyCharExceptNewline
        } else {
            Atom::AnyChar
        };
        self.push_atom(atom);
        Ok(())
    }

    pub(super) fn bracket(&mut self, offset: usize) -> Result<()> {
        self.check_after_dollar(offset)?;
        let (atom, end) = compile_bracket(self.pattern, offset, self.flags, self.collation)?;
        self.pos = end;
        self.push_atom(atom);
        Ok(())
    }

    fn back_reference(&mut self, group: u16, offset: usize) -> Result<()> {
        if !self.closed.contains(&group) {
            return Err(CompileError::new(
                offset,
                CompileErrorKind::InvalidBackReference,
            ));
        }
        self.check_after_dollar(offset)?;
        let atom = if self.flags.ignore_case {
            Atom::BackRefFold(group)
        } else {
            Atom::BackRef(group)
        };
        self.push_atom(atom);
        Ok(())
    }

    fn zero_width(&mut self, atom: Atom) {
        self.emit(atom.into());
        self.prev = Prev::ZeroWidth;
    }

    fn word_boundary(&mut self, kind: WordBoundary) -> Result<()> {
        self.zero_width(Atom::WordBoundary(kind));
        Ok(())
    }

    /// `^`: always an anchor in ERE; in BRE only where an expression starts.
    pub(super) fn caret(&mut self, offset: usize) -> Result<()> {
        if self.flags.extended || self.prev == Prev::Start {
            self.zero_width(Atom::LineStart);
            Ok(())
        } else {
            self.literal('^', offset)
        }
    }

    /// `$`: always an anchor in ERE; in BRE only where an expression ends.
    pub(super) fn dollar(&mut self, offset: usize) -> Result<()> {
        if self.flags.extended {
            self.zero_width(Atom::LineEnd);
            self.scope_mut().dollar = Some(offset);
            return Ok(());
        }

        let rest = self.rest();
        if rest.is_empty() || rest.starts_with("\\)") || rest.starts_with("\\|") {
            self.zero_width(Atom::LineEnd);
            Ok(())
        } else {
            self.literal('$', offset)
        }
    }
}
