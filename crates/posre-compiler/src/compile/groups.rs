//! Parenthesized groups and alternation.
//!
//! Alternatives are chained through `AltStart { next }` markers. The first
//! alternative of a scope only learns it is one when `|` is reached, so its
//! marker is inserted retroactively at the scope's `branch_start`. Every
//! recorded group span at or after that index moves by one.

use posre_bytecode::Atom;

use super::compiler::{Compiler, Prev, Scope};
use crate::Result;
use crate::error::{CompileError, CompileErrorKind};

impl Compiler<'_> {
    pub(super) fn open_group(&mut self, offset: usize) -> Result<()> {
        self.check_after_dollar(offset)?;
        let group = u16::try_from(self.groups.len())
            .map_err(|_| CompileError::new(offset, CompileErrorKind::PatternTooLarge))?;

        let start = self.emit(Atom::GroupStart(group).into());
        self.groups.push((start as u32, None));
        let closed = self.closed.clone();
        self.scopes.push(Scope::new(group, offset, start + 1, closed));
        self.prev = Prev::Start;
        Ok(())
    }

    pub(super) fn close_group(&mut self, offset: usize) -> Result<()> {
        let Some(scope) = self.scopes.pop() else {
            return Err(CompileError::new(offset, CompileErrorKind::UnmatchedParen));
        };
        self.close_alternatives(&scope);

        let end = self.emit(Atom::GroupEnd(scope.group).into());
        if let Some(span) = self.groups.get_mut(scope.group as usize) {
            span.1 = Some(end as u32);
        }
        for group in scope.closed_in_branches.into_iter().chain([scope.group]) {
            if !self.closed.contains(&group) {
                self.closed.push(group);
            }
        }
        self.prev = Prev::Atom(end);
        Ok(())
    }

    /// `|`: finish the current alternative and open the next one.
    pub(super) fn alternate(&mut self) {
        let marker = match self.scope().alt_marker {
            Some(marker) => marker,
            None => {
                let at = self.scope().branch_start;
                self.insert_marker(at);
                at
            }
        };

        let group = self.scope().group;
        self.emit(Atom::AltEnd { group }.into());
        let next = self.emit(Atom::AltStart { next: 0 }.into());
        self.link(marker, next);

        let closed = std::mem::take(&mut self.closed);
        let scope = self.scope_mut();
        scope.alt_marker = Some(next);
        scope.branch_start = next + 1;
        scope.dollar = None;
        for group in closed {
            if !scope.closed_in_branches.contains(&group) {
                scope.closed_in_branches.push(group);
            }
        }
        let reset = scope.closed_before.clone();
        self.closed = reset;
        self.prev = Prev::Start;
    }

    /// Terminate the alternative chain of `scope` with the sentinel marker.
    pub(super) fn close_alternatives(&mut self, scope: &Scope) {
        if let Some(marker) = scope.alt_marker {
            let sentinel = self.emit(Atom::AltStart { next: 0 }.into());
            self.link(marker, sentinel);
        }
    }

    fn link(&mut self, marker: usize, target: usize) {
        self.insts[marker].atom = Atom::AltStart {
            next: (target - marker) as u32,
        };
    }

    /// Insert a head marker at `at`, shifting every group marker at or
    /// after it. Group 0 has no start marker and its end is not yet placed.
    fn insert_marker(&mut self, at: usize) {
        self.insts.insert(at, Atom::AltStart { next: 0 }.into());
        let at = at as u32;
        for (start, end) in self.groups.iter_mut().skip(1) {
            if *start >= at {
                *start += 1;
            }
            if let Some(end) = end
                && *end >= at
            {
                *end += 1;
            }
        }
    }
}
