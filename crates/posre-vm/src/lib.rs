//! Backtracking matcher for compiled posre programs.
//!
//! This crate provides the virtual machine that executes a compiled
//! [`Program`](posre_bytecode::Program) against a subject string, producing
//! the leftmost-longest match and its capture spans.

pub mod engine;

pub use engine::{
    Captures, ExecFlags, FuelLimits, MatchError, NoopTracer, PrintTracer, Span, Tracer, VM,
    VMBuilder, match_bracket,
};
