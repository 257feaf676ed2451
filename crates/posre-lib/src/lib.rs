//! posre: POSIX basic and extended regular expressions.
//!
//! Patterns are compiled once into an immutable program and then run any
//! number of times. Matching follows the POSIX leftmost-longest rule.
//!
//! # Example
//!
//! ```
//! use posre_lib::{CompileFlags, Regex};
//!
//! let re = Regex::new("(foo|foobar)", CompileFlags::ere()).unwrap();
//! let m = re.find("a foobar").unwrap().unwrap();
//! assert_eq!(m.as_str(), "foobar");
//! assert_eq!(m.group(1), Some("foobar"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod matches;
mod regex;

#[cfg(test)]
mod matches_tests;

pub use matches::{Match, Matches};
pub use regex::{Regex, RegexBuilder};

pub use posre_bytecode::Program;
pub use posre_compiler::{CompileError, CompileErrorKind, CompileFlags, CompileLimits};
pub use posre_core::{CLocale, CharClass, Collation, Colors, Utf8Locale};
pub use posre_vm::{
    Captures, ExecFlags, FuelLimits, MatchError, NoopTracer, PrintTracer, Span, Tracer,
};

/// Errors produced while compiling or running a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Result type for regex operations.
pub type Result<T> = std::result::Result<T, Error>;
