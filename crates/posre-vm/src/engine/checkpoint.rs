//! Checkpoints for backtracking.
//!
//! Every choice point the VM meets (a quantifier that can back off, an
//! optional group, another iteration of a repeated group, an alternation)
//! pushes a checkpoint. When the running path ends, the most recent
//! checkpoint decides what runs next. The VM never recurses; the
//! recursion limit bounds the length of this stack.

use super::slots::Slots;

/// A path that reached `EndOfProgram`.
#[derive(Debug)]
pub(crate) struct Outcome {
    pub end: usize,
    pub slots: Slots,
}

/// One path through the program, with its own capture slots.
#[derive(Debug)]
pub(crate) struct Thread {
    pub pc: usize,
    pub pos: usize,
    pub slots: Slots,
}

#[derive(Debug)]
pub(crate) enum Checkpoint {
    /// Ordered choice. When the running path fails, execution resumes at
    /// `resume` from the most recently pushed stop; a success is final.
    Retry {
        /// Instruction that made the choice.
        pc: usize,
        resume: usize,
        slots: Slots,
        /// Positions still to try, last one first. Never empty.
        stops: Vec<usize>,
        /// Position the running path started from.
        last: usize,
    },
    /// Alternation. Every branch runs to the end of the program and the one
    /// ending furthest wins; on a tie the earlier branch stays.
    Longest {
        /// `AltStart` marker of the running branch.
        marker: usize,
        pos: usize,
        slots: Slots,
        best: Option<Outcome>,
    },
}

/// Stack of pending checkpoints.
#[derive(Debug, Default)]
pub(crate) struct CheckpointStack {
    stack: Vec<Checkpoint>,
}

impl CheckpointStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, checkpoint: Checkpoint) {
        self.stack.push(checkpoint);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Checkpoint> {
        self.stack.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Drop everything left over from an earlier attempt.
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
