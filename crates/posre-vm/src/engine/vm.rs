//! Virtual machine for executing compiled programs.

use posre_bytecode::{Atom, Inst, Program, WordBoundary};
use posre_core::Collation;

use super::bracket::match_bracket;
use super::checkpoint::{Checkpoint, CheckpointStack, Outcome, Thread};
use super::error::MatchError;
use super::slots::{Captures, Slot, Slots, Span};
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for match execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum total steps (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum number of pending backtrack checkpoints (default: 100,000).
    pub(crate) recursion_limit: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 100_000,
        }
    }
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// Per-call execution flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecFlags {
    /// The subject start is not the beginning of a line.
    pub not_bol: bool,
    /// The subject end is not the end of a line.
    pub not_eol: bool,
}

impl ExecFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn not_bol(mut self, value: bool) -> Self {
        self.not_bol = value;
        self
    }

    pub fn not_eol(mut self, value: bool) -> Self {
        self.not_eol = value;
        self
    }
}

/// Why a path through the program did not produce a match.
#[derive(Debug)]
enum Failure {
    /// Ordinary failure: try something else.
    NoMatch,
    /// A leading `^` failed; no later start position can succeed either.
    AnchorViolation,
    Fatal(MatchError),
}

impl From<MatchError> for Failure {
    fn from(err: MatchError) -> Self {
        Failure::Fatal(err)
    }
}

type Step = Result<Outcome, Failure>;

/// Virtual machine state for one subject.
pub struct VM<'a> {
    program: &'a Program,
    collation: &'a dyn Collation,
    subject: &'a str,
    flags: ExecFlags,
    limits: FuelLimits,
    exec_fuel: u32,
    checkpoints: CheckpointStack,
}

/// Builder for VM instances.
pub struct VMBuilder<'a> {
    program: &'a Program,
    collation: &'a dyn Collation,
    subject: &'a str,
    flags: ExecFlags,
    limits: FuelLimits,
}

impl<'a> VMBuilder<'a> {
    /// Create a new VM builder.
    pub fn new(program: &'a Program, collation: &'a dyn Collation, subject: &'a str) -> Self {
        Self {
            program,
            collation,
            subject,
            flags: ExecFlags::default(),
            limits: FuelLimits::default(),
        }
    }

    pub fn flags(mut self, flags: ExecFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.recursion_limit(limit);
        self
    }

    /// Build the VM.
    pub fn build(self) -> VM<'a> {
        VM {
            program: self.program,
            collation: self.collation,
            subject: self.subject,
            flags: self.flags,
            limits: self.limits,
            exec_fuel: self.limits.get_exec_fuel(),
            checkpoints: CheckpointStack::new(),
        }
    }
}

impl<'a> VM<'a> {
    /// Create a VM builder.
    pub fn builder(
        program: &'a Program,
        collation: &'a dyn Collation,
        subject: &'a str,
    ) -> VMBuilder<'a> {
        VMBuilder::new(program, collation, subject)
    }

    /// Find the leftmost-longest match starting at or after byte `start`.
    ///
    /// `capture_limit` is the number of spans to report, the whole match
    /// included; it is raised to at least one.
    pub fn execute(
        &mut self,
        start: usize,
        capture_limit: usize,
    ) -> Result<Option<Captures>, MatchError> {
        self.execute_with(start, capture_limit, &mut NoopTracer)
    }

    /// Execute with a tracer for debugging.
    pub fn execute_with<T: Tracer>(
        &mut self,
        start: usize,
        capture_limit: usize,
        tracer: &mut T,
    ) -> Result<Option<Captures>, MatchError> {
        self.exec_fuel = self.limits.exec_fuel;

        let program = self.program;
        let first = program.first_bytes();
        let limit = if program.flags().no_capture {
            1
        } else {
            capture_limit
        };

        let mut s = start;
        while s <= self.subject.len() {
            let admissible = match self.subject.as_bytes().get(s) {
                Some(&b) => self.subject.is_char_boundary(s) && first.contains(b),
                None => first.is_full(),
            };

            if admissible {
                tracer.trace_attempt(s);
                let mut slots = vec![Slot::default(); program.groups().len()];
                if let Some(whole) = slots.first_mut() {
                    whole.start = Some(s);
                }
                let thread = Thread { pc: 0, pos: s, slots };
                match self.search(thread, tracer) {
                    Ok(outcome) => {
                        tracer.trace_accept(Span::new(s, outcome.end));
                        return Ok(Some(Captures::from_slots(&outcome.slots, limit)));
                    }
                    Err(Failure::NoMatch) => {}
                    Err(Failure::AnchorViolation) => break,
                    Err(Failure::Fatal(err)) => return Err(err),
                }
            }

            s += self.width_at(s).max(1);
        }
        Ok(None)
    }

    /// Width of the character at `pos`, or 0 at the end or off a boundary.
    fn width_at(&self, pos: usize) -> usize {
        self.collation
            .decode(self.subject, pos)
            .map_or(0, |(_, width)| width)
    }

    fn tick(&mut self) -> Result<(), Failure> {
        if self.exec_fuel == 0 {
            return Err(MatchError::ExecFuelExhausted(self.limits.exec_fuel).into());
        }
        self.exec_fuel -= 1;
        Ok(())
    }

    fn push(&mut self, checkpoint: Checkpoint) -> Result<(), Failure> {
        if self.checkpoints.len() >= self.limits.recursion_limit as usize {
            return Err(MatchError::RecursionLimitExceeded(self.limits.recursion_limit).into());
        }
        self.checkpoints.push(checkpoint);
        Ok(())
    }

    /// Run `thread` and then every checkpoint it leaves behind, until the
    /// stack is empty.
    fn search<T: Tracer>(&mut self, thread: Thread, tracer: &mut T) -> Step {
        self.checkpoints.clear();
        let mut result = self.exec(thread, tracer);

        loop {
            if matches!(result, Err(Failure::AnchorViolation | Failure::Fatal(_))) {
                return result;
            }
            let Some(checkpoint) = self.checkpoints.pop() else {
                return result;
            };

            result = match checkpoint {
                Checkpoint::Retry { .. } if result.is_ok() => result,
                Checkpoint::Retry {
                    pc,
                    resume,
                    slots,
                    mut stops,
                    last,
                } => {
                    tracer.trace_backtrack(pc, last);
                    let Some(at) = stops.pop() else {
                        continue;
                    };
                    let slots = if stops.is_empty() {
                        slots
                    } else {
                        let copy = slots.clone();
                        self.checkpoints.push(Checkpoint::Retry {
                            pc,
                            resume,
                            slots,
                            stops,
                            last: at,
                        });
                        copy
                    };
                    self.exec(Thread { pc: resume, pos: at, slots }, tracer)
                }
                Checkpoint::Longest {
                    marker,
                    pos,
                    slots,
                    mut best,
                } => {
                    let conclusive = match result {
                        Ok(outcome) => {
                            tracer.trace_branch(marker, Some(outcome.end));
                            let conclusive = outcome.end == self.subject.len();
                            if best.as_ref().is_none_or(|b| outcome.end > b.end) {
                                best = Some(outcome);
                            }
                            conclusive
                        }
                        Err(_) => {
                            tracer.trace_branch(marker, None);
                            false
                        }
                    };
                    let following = if conclusive {
                        None
                    } else {
                        self.next_branch(marker)?
                    };
                    match following {
                        Some(marker) => {
                            let thread = Thread {
                                pc: marker + 1,
                                pos,
                                slots: slots.clone(),
                            };
                            self.checkpoints.push(Checkpoint::Longest {
                                marker,
                                pos,
                                slots,
                                best,
                            });
                            self.exec(thread, tracer)
                        }
                        None => best.ok_or(Failure::NoMatch),
                    }
                }
            };
        }
    }

    /// Run one path until it reaches `EndOfProgram` or fails. Choice points
    /// push a checkpoint and continue with their first option.
    fn exec<T: Tracer>(&mut self, thread: Thread, tracer: &mut T) -> Step {
        let program = self.program;
        let Thread {
            mut pc,
            mut pos,
            mut slots,
        } = thread;

        loop {
            self.tick()?;
            let inst = program
                .inst(pc)
                .ok_or_else(|| malformed(format!("jump to {pc} leaves the program")))?;
            tracer.trace_instruction(pc, inst, pos);

            match &inst.atom {
                Atom::EndOfProgram => {
                    slot_mut(&mut slots, 0)?.end = Some(pos);
                    return Ok(Outcome { end: pos, slots });
                }

                Atom::GroupStart(group) => {
                    let group = *group;
                    tracer.trace_group_enter(group, pos);
                    if inst.repeat.min() == 0 {
                        let mut skip = slots.clone();
                        let slot = slot_mut(&mut skip, group)?;
                        slot.start = None;
                        slot.end = None;
                        let resume = self.group_span(group)?.end as usize + 1;
                        self.push(Checkpoint::Retry {
                            pc,
                            resume,
                            slots: skip,
                            stops: vec![pos],
                            last: pos,
                        })?;
                    }
                    let slot = slot_mut(&mut slots, group)?;
                    slot.count = 0;
                    slot.start = Some(pos);
                    pc += 1;
                }

                Atom::GroupEnd(group) => {
                    let group = *group;
                    tracer.trace_group_exit(group, pos);
                    let slot = slot_mut(&mut slots, group)?;
                    if inst.repeat.is_once() {
                        slot.end = Some(pos);
                        pc += 1;
                        continue;
                    }

                    // An empty iteration after a completed one adds nothing;
                    // the checkpoint that leaves the loop keeps the last real span.
                    let zero_width = slot.start == Some(pos);
                    if zero_width && slot.count >= inst.repeat.min().max(1) {
                        return Err(Failure::NoMatch);
                    }
                    slot.end = Some(pos);
                    slot.count += 1;
                    let count = slot.count;

                    if !zero_width && inst.repeat.below_max(count) {
                        if count >= inst.repeat.min() {
                            self.push(Checkpoint::Retry {
                                pc,
                                resume: pc + 1,
                                slots: slots.clone(),
                                stops: vec![pos],
                                last: pos,
                            })?;
                        }
                        slot_mut(&mut slots, group)?.start = Some(pos);
                        pc = self.group_span(group)?.start as usize + 1;
                        continue;
                    }
                    pc += 1;
                }

                Atom::AltStart { next: 0 } => pc += 1,
                Atom::AltStart { .. } => {
                    self.push(Checkpoint::Longest {
                        marker: pc,
                        pos,
                        slots: slots.clone(),
                        best: None,
                    })?;
                    pc += 1;
                }
                Atom::AltEnd { group } => pc = self.group_span(*group)?.end as usize,

                Atom::LineStart => {
                    if !self.at_line_start(pos) {
                        if pc == 0 && program.flags().anchored {
                            return Err(Failure::AnchorViolation);
                        }
                        return Err(Failure::NoMatch);
                    }
                    pc += 1;
                }
                Atom::LineEnd => {
                    if !self.at_line_end(pos) {
                        return Err(Failure::NoMatch);
                    }
                    pc += 1;
                }
                Atom::WordBoundary(kind) => {
                    if !self.at_word_boundary(*kind, pos) {
                        return Err(Failure::NoMatch);
                    }
                    pc += 1;
                }

                atom if inst.repeat.is_once() => {
                    pos = self.step(atom, pos, &slots).ok_or(Failure::NoMatch)?;
                    pc += 1;
                }
                _ => {
                    pos = self.repeat(pc, inst, pos, &slots)?;
                    pc += 1;
                }
            }
        }
    }

    /// The marker of the branch after the one headed at `marker`, or `None`
    /// when the chain ends there.
    fn next_branch(&self, marker: usize) -> Result<Option<usize>, Failure> {
        let following = marker + self.alt_offset(marker)?;
        Ok((self.alt_offset(following)? != 0).then_some(following))
    }

    fn alt_offset(&self, marker: usize) -> Result<usize, Failure> {
        match self.program.inst(marker).map(|inst| &inst.atom) {
            Some(Atom::AltStart { next }) => Ok(*next as usize),
            _ => Err(malformed(format!("alternative at {marker} has no head marker")).into()),
        }
    }

    /// A repeated single-step atom: take the minimum, extend greedily up to
    /// the maximum, and leave the shorter stops behind for backing off.
    /// Returns the position after the longest run.
    fn repeat(
        &mut self,
        pc: usize,
        inst: &Inst,
        pos: usize,
        slots: &Slots,
    ) -> Result<usize, Failure> {
        let mut pos = pos;
        for _ in 0..inst.repeat.min() {
            self.tick()?;
            pos = self.step(&inst.atom, pos, slots).ok_or(Failure::NoMatch)?;
        }

        let mut stops = vec![pos];
        let mut count = inst.repeat.min();
        while inst.repeat.below_max(count) {
            self.tick()?;
            match self.step(&inst.atom, pos, slots) {
                Some(next) if next > pos => {
                    pos = next;
                    stops.push(pos);
                    count += 1;
                }
                _ => break,
            }
        }

        let Some(longest) = stops.pop() else {
            return Err(Failure::NoMatch);
        };
        if !stops.is_empty() {
            self.push(Checkpoint::Retry {
                pc,
                resume: pc + 1,
                slots: slots.clone(),
                stops,
                last: longest,
            })?;
        }
        Ok(longest)
    }

    /// Match one repetition of a consuming atom; returns the new position.
    fn step(&self, atom: &Atom, pos: usize, slots: &[Slot]) -> Option<usize> {
        let rest = self.subject.get(pos..)?;
        match atom {
            Atom::Literal(c) => rest.starts_with(*c).then(|| pos + c.len_utf8()),
            Atom::LiteralFold(a, b) => {
                let (c, width) = self.collation.decode(self.subject, pos)?;
                (c == *a || c == *b).then_some(pos + width)
            }
            Atom::LiteralString(s) => rest.starts_with(s.as_str()).then(|| pos + s.len()),
            Atom::LiteralStringFold(pairs) => {
                let mut at = pos;
                for &(a, b) in pairs {
                    let (c, width) = self.collation.decode(self.subject, at)?;
                    if c != a && c != b {
                        return None;
                    }
                    at += width;
                }
                Some(at)
            }
            Atom::AnyChar => Some(pos + self.collation.decode(self.subject, pos)?.1),
            Atom::AnyCharExceptNewline => {
                let (c, width) = self.collation.decode(self.subject, pos)?;
                (c != '\n').then_some(pos + width)
            }
            Atom::Bracket(_) | Atom::BracketWeighted(_) => {
                match_bracket(atom, self.subject, pos, self.collation)
            }
            Atom::BackRef(group) => {
                let captured = self.captured(slots, *group)?;
                rest.starts_with(captured).then(|| pos + captured.len())
            }
            Atom::BackRefFold(group) => {
                let captured = self.captured(slots, *group)?;
                let mut at = pos;
                for expected in captured.chars() {
                    let (c, width) = self.collation.decode(self.subject, at)?;
                    if !self.collation.fold_eq(expected, c) {
                        return None;
                    }
                    at += width;
                }
                Some(at)
            }
            _ => None,
        }
    }

    /// Text captured so far by `group`; `None` when the group is unset.
    fn captured(&self, slots: &[Slot], group: u16) -> Option<&'a str> {
        let span = slots.get(group as usize)?.span()?;
        let subject = self.subject;
        subject.get(span.range())
    }

    fn at_line_start(&self, pos: usize) -> bool {
        if pos == 0 {
            return !self.flags.not_bol;
        }
        self.program.flags().newline_sensitive
            && self.subject.as_bytes().get(pos - 1) == Some(&b'\n')
    }

    fn at_line_end(&self, pos: usize) -> bool {
        if pos == self.subject.len() {
            return !self.flags.not_eol;
        }
        self.program.flags().newline_sensitive
            && self.subject.as_bytes().get(pos) == Some(&b'\n')
    }

    fn at_word_boundary(&self, kind: WordBoundary, pos: usize) -> bool {
        let before = self
            .subject
            .get(..pos)
            .and_then(|head| head.chars().next_back())
            .is_some_and(|c| self.collation.is_word(c));
        let after = self
            .collation
            .decode(self.subject, pos)
            .is_some_and(|(c, _)| self.collation.is_word(c));
        match kind {
            WordBoundary::Start => !before && after,
            WordBoundary::End => before && !after,
            WordBoundary::Boundary => before != after,
            WordBoundary::NotBoundary => before == after,
        }
    }

    fn group_span(&self, group: u16) -> Result<posre_bytecode::GroupSpan, Failure> {
        self.program
            .group(group)
            .ok_or_else(|| malformed(format!("unknown group {group}")).into())
    }
}

fn malformed(message: String) -> MatchError {
    MatchError::MalformedProgram(message)
}

fn slot_mut(slots: &mut [Slot], group: u16) -> Result<&mut Slot, Failure> {
    slots
        .get_mut(group as usize)
        .ok_or_else(|| malformed(format!("unknown group {group}")).into())
}
