//! posre compiler: BRE/ERE pattern text to bytecode.
//!
//! This crate provides the compilation pipeline:
//! - `bracket` - `[...]` parsing and lowering to byte or weight sets
//! - `compile` - single-pass pattern compiler (literals, groups, alternation, repetition)
//! - `first_bytes` - conservative leading-byte analysis
//! - `error` - compile errors and their annotated rendering

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod bracket;
mod compile;
mod error;
mod first_bytes;
mod flags;

#[cfg(test)]
mod first_bytes_tests;

pub use compile::{compile, compile_with};
pub use error::{CompileError, CompileErrorKind};
pub use flags::{CompileFlags, CompileLimits};

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
