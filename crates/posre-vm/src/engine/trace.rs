//! Tracing infrastructure for debugging VM execution.
//!
//! # Design: Zero-Cost Abstraction
//!
//! When `NoopTracer` is used every trait method is an `#[inline(always)]`
//! empty function, so the compiler removes the calls and their arguments.
//! No tracing state lives in the VM itself.

use std::fmt::Write as _;

use posre_bytecode::{Inst, Program, format_inst};
use posre_core::Colors;

use super::slots::Span;

/// Tracer trait for VM execution instrumentation.
///
/// Each method is called at a specific point during execution:
/// - `trace_attempt` - before trying a match at a new start position
/// - `trace_instruction` - before executing an instruction
/// - `trace_group_enter` / `trace_group_exit` - at group markers
/// - `trace_backtrack` - when a speculative path fails and an earlier choice is retried
/// - `trace_branch` - after each alternative has been tried
/// - `trace_accept` - when a match is found
pub trait Tracer {
    fn trace_attempt(&mut self, start: usize);

    fn trace_instruction(&mut self, pc: usize, inst: &Inst, pos: usize);

    fn trace_group_enter(&mut self, group: u16, pos: usize);

    fn trace_group_exit(&mut self, group: u16, pos: usize);

    fn trace_backtrack(&mut self, pc: usize, pos: usize);

    /// `end` is the overall match end reached through this branch, if any.
    fn trace_branch(&mut self, marker: usize, end: Option<usize>);

    fn trace_accept(&mut self, span: Span);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_attempt(&mut self, _start: usize) {}

    #[inline(always)]
    fn trace_instruction(&mut self, _pc: usize, _inst: &Inst, _pos: usize) {}

    #[inline(always)]
    fn trace_group_enter(&mut self, _group: u16, _pos: usize) {}

    #[inline(always)]
    fn trace_group_exit(&mut self, _group: u16, _pos: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _pc: usize, _pos: usize) {}

    #[inline(always)]
    fn trace_branch(&mut self, _marker: usize, _end: Option<usize>) {}

    #[inline(always)]
    fn trace_accept(&mut self, _span: Span) {}
}

/// Tracer that collects a human-readable execution log.
pub struct PrintTracer {
    lines: Vec<String>,
    /// Width of the instruction-index column.
    pc_width: usize,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(program: &Program, colors: Colors) -> Self {
        let pc_width = program.len().saturating_sub(1).max(1).to_string().len();
        Self {
            lines: Vec::new(),
            pc_width,
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All collected lines joined with newlines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            writeln!(out, "{line}").expect("String write never fails");
        }
        out
    }

    /// Print all trace lines.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    fn at(&self, pos: usize) -> String {
        self.colors.paint(self.colors.dim, &format!("@{pos}"))
    }

    fn push_step(&mut self, pc: usize, body: String) {
        let width = self.pc_width;
        self.lines.push(format!("  {pc:>width$}  {body}"));
    }
}

impl Tracer for PrintTracer {
    fn trace_attempt(&mut self, start: usize) {
        let at = self.at(start);
        self.lines.push(format!("attempt {at}"));
    }

    fn trace_instruction(&mut self, pc: usize, inst: &Inst, pos: usize) {
        let body = format!("{}  {}", format_inst(inst, self.colors), self.at(pos));
        self.push_step(pc, body);
    }

    fn trace_group_enter(&mut self, group: u16, pos: usize) {
        let label = self.colors.paint(self.colors.blue, &format!("#{group}"));
        let at = self.at(pos);
        self.lines.push(format!("    enter {label} {at}"));
    }

    fn trace_group_exit(&mut self, group: u16, pos: usize) {
        let label = self.colors.paint(self.colors.blue, &format!("#{group}"));
        let at = self.at(pos);
        self.lines.push(format!("    exit {label} {at}"));
    }

    fn trace_backtrack(&mut self, pc: usize, pos: usize) {
        let body = format!("backtrack {}", self.at(pos));
        self.push_step(pc, body);
    }

    fn trace_branch(&mut self, marker: usize, end: Option<usize>) {
        let body = match end {
            Some(end) => format!("branch ok, match ends {}", self.at(end)),
            None => "branch failed".to_string(),
        };
        self.push_step(marker, body);
    }

    fn trace_accept(&mut self, span: Span) {
        let text = format!("accept {}..{}", span.start, span.end);
        self.lines.push(self.colors.paint(self.colors.green, &text));
    }
}
