//! Single-pass BRE/ERE compiler.
//!
//! The pattern is read left to right and instructions are appended to a
//! growable vector. Everything that must be revisited later (the last
//! quantifiable instruction, open alternation markers, group spans) is held
//! as an index, so the vector can grow or take an insertion without
//! invalidating anything.
//!
//! # Module Organization
//!
//! - `compiler`: state, cursor and the token loop
//! - `atoms`: literals, `.`, brackets, escapes, anchors, back-references
//! - `repeat`: `*`, `+`, `?` and intervals
//! - `groups`: parentheses and alternation

mod atoms;
mod compiler;
mod groups;
mod repeat;


use posre_bytecode::Program;
use posre_core::Collation;

use crate::Result;
use crate::flags::{CompileFlags, CompileLimits};

use compiler::Compiler;

/// Compile `pattern` with default limits.
pub fn compile(pattern: &str, flags: CompileFlags, collation: &dyn Collation) -> Result<Program> {
    compile_with(pattern, flags, CompileLimits::default(), collation)
}

/// Compile `pattern` under explicit resource limits.
pub fn compile_with(
    pattern: &str,
    flags: CompileFlags,
    limits: CompileLimits,
    collation: &dyn Collation,
) -> Result<Program> {
    Compiler::new(pattern, flags, limits, collation).compile()
}
