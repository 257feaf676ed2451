//! Core compiler state and the token loop.

use posre_bytecode::{Atom, GroupSpan, Inst, Program, ProgramFlags, Repeat};
use posre_core::Collation;

use crate::Result;
use crate::error::{CompileError, CompileErrorKind};
use crate::first_bytes::first_bytes;
use crate::flags::{CompileFlags, CompileLimits};

/// What a following quantifier would attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Prev {
    /// Start of the pattern, of a group, or of an alternative.
    Start,
    /// An anchor or word assertion.
    ZeroWidth,
    /// A matchable instruction (or a group's end marker).
    Atom(usize),
    /// A matchable instruction that already carries a repetition.
    Quantified(usize),
}

/// One open nesting level: the whole pattern or a parenthesized group.
#[derive(Clone, Debug)]
pub(super) struct Scope {
    pub group: u16,
    /// Pattern offset of the opening parenthesis.
    pub open: usize,
    /// Index of the first instruction of the current alternative.
    pub branch_start: usize,
    /// Head marker of the current alternative once `|` has been seen.
    pub alt_marker: Option<usize>,
    /// Offset of an ERE `$` anchor in the current alternative.
    pub dollar: Option<usize>,
    /// Groups a back-reference could name when the scope opened.
    pub closed_before: Vec<u16>,
    /// Groups closed by the alternatives already finished.
    pub closed_in_branches: Vec<u16>,
}

impl Scope {
    pub fn new(group: u16, open: usize, branch_start: usize, closed_before: Vec<u16>) -> Self {
        Self {
            group,
            open,
            branch_start,
            alt_marker: None,
            dollar: None,
            closed_before,
            closed_in_branches: Vec::new(),
        }
    }
}

/// Compiler state for one pattern.
pub(super) struct Compiler<'a> {
    pub(super) pattern: &'a str,
    pub(super) pos: usize,
    pub(super) flags: CompileFlags,
    limits: CompileLimits,
    pub(super) collation: &'a dyn Collation,
    pub(super) insts: Vec<Inst>,
    /// Instruction indices of each group's markers; the end is unknown
    /// while the group is open.
    pub(super) groups: Vec<(u32, Option<u32>)>,
    /// The whole-pattern scope.
    pub(super) root: Scope,
    /// Open groups, innermost last.
    pub(super) scopes: Vec<Scope>,
    /// Groups closed earlier on the path to the cursor; only these may be
    /// back-referenced.
    pub(super) closed: Vec<u16>,
    pub(super) prev: Prev,
}

impl<'a> Compiler<'a> {
    pub fn new(
        pattern: &'a str,
        flags: CompileFlags,
        limits: CompileLimits,
        collation: &'a dyn Collation,
    ) -> Self {
        Self {
            pattern,
            pos: 0,
            flags,
            limits,
            collation,
            insts: Vec::new(),
            groups: vec![(0, None)],
            root: Scope::new(0, 0, 0, Vec::new()),
            scopes: Vec::new(),
            closed: Vec::new(),
            prev: Prev::Start,
        }
    }

    pub fn compile(mut self) -> Result<Program> {
        while let Some(c) = self.bump() {
            let offset = self.pos - c.len_utf8();
            self.token(c, offset)?;
            if self.insts.len() > self.limits.max_program_len {
                return Err(CompileError::new(offset, CompileErrorKind::PatternTooLarge));
            }
        }
        self.finish()
    }

    fn token(&mut self, c: char, offset: usize) -> Result<()> {
        let extended = self.flags.extended;
        match c {
            '\\' => self.escape(offset),
            '[' => self.bracket(offset),
            '.' => self.any_char(offset),
            '*' => self.star(offset),
            '^' => self.caret(offset),
            '$' => self.dollar(offset),
            '+' if extended => self.quantify(Repeat::OneOrMore, offset),
            '?' if extended => self.quantify(Repeat::ZeroOrOne, offset),
            '{' if extended => self.ere_interval(offset),
            '(' if extended => self.open_group(offset),
            ')' if extended => self.close_group(offset),
            '|' if extended => {
                self.alternate();
                Ok(())
            }
            _ => self.literal(c, offset),
        }
    }

    fn finish(mut self) -> Result<Program> {
        if let Some(scope) = self.scopes.last() {
            return Err(CompileError::new(scope.open, CompileErrorKind::UnmatchedParen));
        }
        let root = self.root.clone();
        self.close_alternatives(&root);

        let end = self.emit(Atom::EndOfProgram.into());
        self.groups[0] = (0, Some(end as u32));
        if self.insts.len() > self.limits.max_program_len {
            return Err(CompileError::new(
                self.pattern.len(),
                CompileErrorKind::PatternTooLarge,
            ));
        }

        let groups: Vec<GroupSpan> = self
            .groups
            .iter()
            .map(|&(start, end)| GroupSpan {
                start,
                end: end.unwrap_or(start),
            })
            .collect();
        let first = first_bytes(&self.insts, &groups);
        let anchored = !self.flags.newline_sensitive
            && self
                .insts
                .first()
                .is_some_and(|inst| inst.atom == Atom::LineStart);
        let flags = ProgramFlags {
            ignore_case: self.flags.ignore_case,
            newline_sensitive: self.flags.newline_sensitive,
            no_capture: self.flags.no_capture,
            anchored,
        };

        let program = Program::new(self.insts, groups, first, flags);
        debug_assert_eq!(program.verify(), Ok(()));
        Ok(program)
    }

    pub(super) fn emit(&mut self, inst: Inst) -> usize {
        self.insts.push(inst);
        self.insts.len() - 1
    }

    /// The innermost open scope.
    pub(super) fn scope(&self) -> &Scope {
        self.scopes.last().unwrap_or(&self.root)
    }

    pub(super) fn scope_mut(&mut self) -> &mut Scope {
        self.scopes.last_mut().unwrap_or(&mut self.root)
    }

    pub(super) fn rest(&self) -> &'a str {
        let pattern = self.pattern;
        &pattern[self.pos..]
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(super) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub(super) fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }
}
