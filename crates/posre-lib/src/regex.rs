//! Compiled patterns and the builder that configures them.

use posre_bytecode::{Program, dump};
use posre_compiler::{CompileFlags, CompileLimits, compile_with};
use posre_core::{CLocale, Collation, Colors};
use posre_vm::{ExecFlags, FuelLimits, NoopTracer, Tracer, VM};

use crate::Result;
use crate::matches::{Match, Matches};

/// Configures and compiles a [`Regex`].
#[derive(Clone, Debug)]
pub struct RegexBuilder<'p> {
    pattern: &'p str,
    flags: CompileFlags,
    compile_limits: CompileLimits,
    fuel_limits: FuelLimits,
}

impl<'p> RegexBuilder<'p> {
    /// Start from basic (BRE) syntax with default limits.
    pub fn new(pattern: &'p str) -> Self {
        Self {
            pattern,
            flags: CompileFlags::bre(),
            compile_limits: CompileLimits::default(),
            fuel_limits: FuelLimits::default(),
        }
    }

    pub fn flags(mut self, flags: CompileFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Use extended (ERE) syntax.
    pub fn extended(mut self, value: bool) -> Self {
        self.flags.extended = value;
        self
    }

    pub fn ignore_case(mut self, value: bool) -> Self {
        self.flags = self.flags.ignore_case(value);
        self
    }

    pub fn newline_sensitive(mut self, value: bool) -> Self {
        self.flags = self.flags.newline_sensitive(value);
        self
    }

    pub fn no_capture(mut self, value: bool) -> Self {
        self.flags = self.flags.no_capture(value);
        self
    }

    pub fn compile_limits(mut self, limits: CompileLimits) -> Self {
        self.compile_limits = limits;
        self
    }

    pub fn fuel_limits(mut self, limits: FuelLimits) -> Self {
        self.fuel_limits = limits;
        self
    }

    /// Compile against the POSIX locale.
    pub fn build(self) -> Result<Regex> {
        self.build_with(CLocale)
    }

    /// Compile against a caller-supplied collation.
    ///
    /// Pass `&adapter` to keep ownership of a collation shared with other
    /// patterns.
    pub fn build_with<C: Collation>(self, collation: C) -> Result<Regex<C>> {
        let program = compile_with(self.pattern, self.flags, self.compile_limits, &collation)?;
        Ok(Regex {
            program,
            collation,
            limits: self.fuel_limits,
        })
    }
}

/// A compiled pattern bound to the collation it was compiled with.
///
/// Matching never mutates the regex, so one value can serve concurrent
/// searches over different subjects.
#[derive(Clone, Debug)]
pub struct Regex<C: Collation = CLocale> {
    program: Program,
    collation: C,
    limits: FuelLimits,
}

impl Regex {
    /// Compile `pattern` against the POSIX locale.
    pub fn new(pattern: &str, flags: CompileFlags) -> Result<Self> {
        RegexBuilder::new(pattern).flags(flags).build()
    }

    pub fn builder(pattern: &str) -> RegexBuilder<'_> {
        RegexBuilder::new(pattern)
    }
}

impl<C: Collation> Regex<C> {
    pub fn with_collation(pattern: &str, flags: CompileFlags, collation: C) -> Result<Self> {
        RegexBuilder::new(pattern).flags(flags).build_with(collation)
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn collation(&self) -> &C {
        &self.collation
    }

    /// Number of parenthesized groups in the pattern.
    pub fn nsub(&self) -> usize {
        self.program.nsub()
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    /// Replace the execution limits used by every search.
    pub fn with_limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Human-readable listing of the compiled program.
    pub fn dump(&self, colors: Colors) -> String {
        dump(&self.program, colors)
    }

    /// Leftmost-longest match anywhere in `subject`, with every group.
    pub fn find<'s>(&self, subject: &'s str) -> Result<Option<Match<'s>>> {
        self.find_at(subject, 0, ExecFlags::default())
    }

    /// Like [`find`](Self::find), but the search starts at byte `start`.
    ///
    /// `^` still only matches at offset 0 (or after a newline in
    /// newline-sensitive mode), so resuming a search mid-subject does not
    /// manufacture a line start.
    pub fn find_at<'s>(
        &self,
        subject: &'s str,
        start: usize,
        flags: ExecFlags,
    ) -> Result<Option<Match<'s>>> {
        self.exec_from(subject, start, flags, usize::MAX, &mut NoopTracer)
    }

    /// Run the pattern once, reporting at most `capture_limit` spans (the
    /// whole match counts as one).
    pub fn exec<'s>(
        &self,
        subject: &'s str,
        flags: ExecFlags,
        capture_limit: usize,
    ) -> Result<Option<Match<'s>>> {
        self.exec_from(subject, 0, flags, capture_limit, &mut NoopTracer)
    }

    /// Like [`exec`](Self::exec), reporting every step to `tracer`.
    pub fn exec_traced<'s, T: Tracer>(
        &self,
        subject: &'s str,
        flags: ExecFlags,
        tracer: &mut T,
    ) -> Result<Option<Match<'s>>> {
        self.exec_from(subject, 0, flags, usize::MAX, tracer)
    }

    pub fn is_match(&self, subject: &str) -> Result<bool> {
        let found = self.exec(subject, ExecFlags::default(), 1)?;
        Ok(found.is_some())
    }

    /// Successive non-overlapping matches, left to right.
    pub fn find_iter<'r, 's>(&'r self, subject: &'s str) -> Matches<'r, 's, C> {
        self.find_iter_with(subject, ExecFlags::default())
    }

    pub fn find_iter_with<'r, 's>(
        &'r self,
        subject: &'s str,
        flags: ExecFlags,
    ) -> Matches<'r, 's, C> {
        Matches::new(self, subject, flags)
    }

    fn exec_from<'s, T: Tracer>(
        &self,
        subject: &'s str,
        start: usize,
        flags: ExecFlags,
        capture_limit: usize,
        tracer: &mut T,
    ) -> Result<Option<Match<'s>>> {
        let mut vm = VM::builder(&self.program, &self.collation, subject)
            .flags(flags)
            .limits(self.limits)
            .build();
        let captures = vm.execute_with(start, capture_limit, tracer)?;
        Ok(captures.map(|captures| Match::new(subject, captures)))
    }
}
