//! Compile-time configuration.

/// Syntax and semantics selected when a pattern is compiled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileFlags {
    /// ERE syntax instead of BRE.
    pub extended: bool,
    pub ignore_case: bool,
    /// `.` and negated brackets skip `\n`; `^`/`$` also match around `\n`.
    pub newline_sensitive: bool,
    /// Report only the whole-match span.
    pub no_capture: bool,
}

impl CompileFlags {
    /// Basic regular expression syntax.
    pub fn bre() -> Self {
        Self::default()
    }

    /// Extended regular expression syntax.
    pub fn ere() -> Self {
        Self {
            extended: true,
            ..Self::default()
        }
    }

    pub fn ignore_case(mut self, value: bool) -> Self {
        self.ignore_case = value;
        self
    }

    pub fn newline_sensitive(mut self, value: bool) -> Self {
        self.newline_sensitive = value;
        self
    }

    pub fn no_capture(mut self, value: bool) -> Self {
        self.no_capture = value;
        self
    }
}

/// Resource ceilings enforced while compiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompileLimits {
    /// Maximum number of instructions in one program.
    pub max_program_len: usize,
}

impl Default for CompileLimits {
    fn default() -> Self {
        Self {
            max_program_len: 65_535,
        }
    }
}

impl CompileLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_program_len(mut self, value: usize) -> Self {
        self.max_program_len = value;
        self
    }
}
