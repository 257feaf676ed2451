//! Human-readable program dump for debugging and snapshot tests.

use std::fmt::Write as _;

use posre_core::Colors;

use crate::instructions::{Atom, Inst, WordBoundary};
use crate::program::Program;
use crate::sets::{ByteSet, WeightSet};

/// Render the capture table, first-byte map and instruction stream.
pub fn dump(program: &Program, colors: Colors) -> String {
    let mut out = String::new();

    out.push_str("[groups]\n");
    for (g, span) in program.groups().iter().enumerate() {
        let label = colors.paint(colors.blue, &format!("#{g}"));
        writeln!(out, "{label}  {}..{}", span.start, span.end).expect("String write never fails");
    }

    out.push_str("\n[first]\n");
    out.push_str(&format_first_bytes(program));
    out.push('\n');

    out.push_str("\n[code]\n");
    let width = width_for_count(program.len());
    for (pc, inst) in program.insts().iter().enumerate() {
        let addr = colors.paint(colors.dim, &format!("{pc:>width$}"));
        writeln!(out, "{addr}  {}", format_inst(inst, colors)).expect("String write never fails");
    }

    out
}

/// One instruction as `mnemonic operand` plus its repetition suffix.
pub fn format_inst(inst: &Inst, colors: Colors) -> String {
    let body = match &inst.atom {
        Atom::Literal(c) => format!("char {}", colors.paint(colors.green, &format!("{c:?}"))),
        Atom::LiteralFold(a, b) => format!(
            "char~ {}",
            colors.paint(colors.green, &format!("{a:?}|{b:?}"))
        ),
        Atom::LiteralString(s) => format!("str {}", colors.paint(colors.green, &format!("{s:?}"))),
        Atom::LiteralStringFold(pairs) => {
            let s: String = pairs.iter().map(|&(c, _)| c).collect();
            format!("str~ {}", colors.paint(colors.green, &format!("{s:?}")))
        }
        Atom::AnyChar => "any".to_string(),
        Atom::AnyCharExceptNewline => "any-nl".to_string(),
        Atom::Bracket(set) => format!("set {}", format_byte_set(set)),
        Atom::BracketWeighted(set) => format!("wset {}", format_weight_set(set)),
        Atom::GroupStart(g) => colors.paint(colors.blue, &format!("open #{g}")),
        Atom::GroupEnd(g) => colors.paint(colors.blue, &format!("close #{g}")),
        Atom::BackRef(g) => format!("backref #{g}"),
        Atom::BackRefFold(g) => format!("backref~ #{g}"),
        Atom::LineStart => "bol".to_string(),
        Atom::LineEnd => "eol".to_string(),
        Atom::WordBoundary(kind) => match kind {
            WordBoundary::Start => "word-start",
            WordBoundary::End => "word-end",
            WordBoundary::Boundary => "word-boundary",
            WordBoundary::NotBoundary => "not-word-boundary",
        }
        .to_string(),
        Atom::AltStart { next: 0 } => colors.paint(colors.blue, "alt end"),
        Atom::AltStart { next } => colors.paint(colors.blue, &format!("alt +{next}")),
        Atom::AltEnd { group } => colors.paint(colors.blue, &format!("alt-done #{group}")),
        Atom::EndOfProgram => "end".to_string(),
    };

    let suffix = inst.repeat.suffix();
    if suffix.is_empty() {
        body
    } else {
        format!("{body}{}", colors.paint(colors.dim, &suffix))
    }
}

fn format_first_bytes(program: &Program) -> String {
    let map = program.first_bytes();
    if map.is_full() {
        return "any".to_string();
    }
    if map.is_empty() {
        return "none".to_string();
    }
    let mut set = ByteSet::new();
    for b in map.iter() {
        set.insert(b);
    }
    join_ranges(set.ranges().into_iter().map(|(lo, hi)| (lo as u32, hi as u32)), " ")
}

fn format_byte_set(set: &ByteSet) -> String {
    if set.is_negated() {
        let mut members = set.clone();
        members.complement();
        format!("[^{}]", byte_ranges(&members))
    } else {
        format!("[{}]", byte_ranges(set))
    }
}

fn byte_ranges(set: &ByteSet) -> String {
    join_ranges(
        set.ranges().into_iter().map(|(lo, hi)| (lo as u32, hi as u32)),
        "",
    )
}

fn format_weight_set(set: &WeightSet) -> String {
    let mut body = join_ranges(set.ranges().into_iter(), "");
    for class in set.classes() {
        write!(body, "[:{}:]", class.name()).expect("String write never fails");
    }
    if set.is_negated() {
        format!("[^{body}]")
    } else {
        format!("[{body}]")
    }
}

fn join_ranges(ranges: impl Iterator<Item = (u32, u32)>, sep: &str) -> String {
    ranges
        .map(|(lo, hi)| {
            if lo == hi {
                format_unit(lo)
            } else {
                format!("{}-{}", format_unit(lo), format_unit(hi))
            }
        })
        .collect::<Vec<_>>()
        .join(sep)
}

fn format_unit(v: u32) -> String {
    match char::from_u32(v) {
        Some(c) if c.is_ascii_graphic() => c.to_string(),
        Some(c) if !c.is_ascii() && !c.is_control() && !c.is_whitespace() => c.to_string(),
        _ if v <= 0xff => format!("\\x{v:02x}"),
        _ => format!("\\u{{{v:x}}}"),
    }
}

/// Digits needed to print the highest index of a `count`-element sequence.
fn width_for_count(count: usize) -> usize {
    count.saturating_sub(1).max(1).to_string().len()
}
