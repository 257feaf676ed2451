//! Runtime engine for executing compiled programs.
//!
//! The VM is a backtracking interpreter driven by an explicit checkpoint
//! stack. Every speculative path (a quantifier back-off, an optional group,
//! a repeated group iteration, an alternative) runs on its own copy of the
//! capture slots, so a failed path is discarded without touching the view
//! of the path that spawned it.

mod bracket;
mod checkpoint;
mod error;
mod slots;
mod trace;
mod vm;

#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod trace_tests;

pub use bracket::match_bracket;
pub use error::MatchError;
pub use slots::{Captures, Span};
pub use trace::{NoopTracer, PrintTracer, Tracer};
pub use vm::{ExecFlags, FuelLimits, VM, VMBuilder};
