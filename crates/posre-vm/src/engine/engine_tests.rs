//! End-to-end matcher tests: compile a pattern, run it, render the spans.

use posre_bytecode::{Atom, FirstByteMap, GroupSpan, Inst, Program, ProgramFlags};
use posre_compiler::{CompileFlags, compile};
use posre_core::{CLocale, Collation, Utf8Locale};

use super::{Captures, ExecFlags, FuelLimits, MatchError, VM};

/// Render captures as `start..end` per entry, `-` for unset groups.
fn render(captures: &Captures) -> String {
    captures
        .iter()
        .map(|span| span.map_or("-".to_string(), |s| format!("{}..{}", s.start, s.end)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_with(
    pattern: &str,
    flags: CompileFlags,
    collation: &dyn Collation,
    exec: ExecFlags,
    subject: &str,
) -> String {
    let program = compile(pattern, flags, collation).expect("pattern should compile");
    let mut vm = VM::builder(&program, collation, subject).flags(exec).build();
    match vm.execute(0, usize::MAX).expect("execution failed") {
        Some(captures) => render(&captures),
        None => "no match".to_string(),
    }
}

fn ere(pattern: &str, subject: &str) -> String {
    run_with(pattern, CompileFlags::ere(), &CLocale, ExecFlags::new(), subject)
}

fn bre(pattern: &str, subject: &str) -> String {
    run_with(pattern, CompileFlags::bre(), &CLocale, ExecFlags::new(), subject)
}

#[test]
fn any_char_finds_leftmost() {
    assert_eq!(ere("a.c", "xabcx"), "1..4");
}

#[test]
fn anchored_literal() {
    assert_eq!(ere("^foo$", "foo"), "0..3");
    assert_eq!(ere("^foo$", "foobar"), "no match");
    assert_eq!(ere("^b", "a\nb"), "no match");
}

#[test]
fn alternation_prefers_longest() {
    assert_eq!(ere("(foo|foobar)", "foobar"), "0..6 0..6");
    assert_eq!(ere("(a|ab)c", "abc"), "0..3 0..2");
    assert_eq!(ere("a|bcd", "xbcda"), "1..4");
}

#[test]
fn alternation_tie_keeps_first_branch() {
    assert_eq!(ere("(ab|a)(bc|c)", "abc"), "0..3 0..2 2..3");
}

#[test]
fn interval_bounds() {
    assert_eq!(ere("a{2,3}", "aaaa"), "0..3");
    assert_eq!(ere("a{2,4}", "a"), "no match");
    assert_eq!(ere("a{2,4}", "aa"), "0..2");
    assert_eq!(ere("a{2,4}", "aaaaaa"), "0..4");
    assert_eq!(ere("a{2,}", "baaaaa"), "1..6");
}

#[test]
fn class_bracket_skips_to_first_digit() {
    assert_eq!(ere("[[:digit:]]+", "ab123cd"), "2..5");
}

#[test]
fn star_matches_empty() {
    assert_eq!(ere("a*", "bbb"), "0..0");
    assert_eq!(ere("x*", "xxx"), "0..3");
    assert_eq!(ere("(a*)*", "b"), "0..0 0..0");
}

#[test]
fn back_reference() {
    assert_eq!(ere(r"(abc)\1", "abcabc"), "0..6 0..3");
    assert_eq!(ere(r"(abc)\1", "abcabd"), "no match");
    assert_eq!(bre(r"\(a*\)b\1", "aabaa"), "0..5 0..2");
}

#[test]
fn back_reference_ignoring_case() {
    let flags = CompileFlags::ere().ignore_case(true);
    assert_eq!(
        run_with(r"(abc)\1", flags, &CLocale, ExecFlags::new(), "ABCabc"),
        "0..6 0..3"
    );
}

#[test]
fn back_reference_to_unset_group_fails() {
    assert_eq!(ere(r"(a)?\1", "b"), "no match");
}

#[test]
fn group_outside_matched_alternative_is_unset() {
    assert_eq!(ere("(a)|b", "b"), "0..1 -");
}

#[test]
fn negated_bracket_consumes_whole_chars() {
    assert_eq!(ere("[^a-c]", "a€"), "1..4");
    assert_eq!(ere("[^a-c]", "abc"), "no match");
}

#[test]
fn repeated_group_reports_last_iteration() {
    assert_eq!(ere("(ab)*c", "ababc"), "0..5 2..4");
    assert_eq!(bre(r"\(a*\)b", "aab"), "0..3 0..2");
    assert_eq!(ere("(a*)+", "aa"), "0..2 0..2");
    assert_eq!(ere("(a*)*", "aab"), "0..2 0..2");
    assert_eq!(ere("(a|b*)+", "ab"), "0..2 1..2");
}

#[test]
fn empty_iteration_still_counts_toward_minimum() {
    assert_eq!(ere("(a*){2}", "aa"), "0..2 2..2");
}

#[test]
fn newline_sensitive_lines() {
    let flags = CompileFlags::ere().newline_sensitive(true);
    let exec = ExecFlags::new();

    assert_eq!(run_with("^b", flags, &CLocale, exec, "a\nb"), "2..3");
    assert_eq!(run_with("a$", flags, &CLocale, exec, "a\nb"), "0..1");
    assert_eq!(run_with("a.b", flags, &CLocale, exec, "a\nb"), "no match");
    assert_eq!(run_with("a[^x]b", flags, &CLocale, exec, "a\nb"), "no match");
    assert_eq!(ere("a.b", "a\nb"), "0..3");
}

#[test]
fn not_bol_and_not_eol() {
    let flags = CompileFlags::ere();

    assert_eq!(
        run_with("^a", flags, &CLocale, ExecFlags::new().not_bol(true), "a"),
        "no match"
    );
    assert_eq!(
        run_with("a$", flags, &CLocale, ExecFlags::new().not_eol(true), "a"),
        "no match"
    );
}

#[test]
fn word_boundaries() {
    assert_eq!(ere(r"\<cat\>", "concat cat"), "7..10");
    assert_eq!(ere(r"\bat", "cat at"), "4..6");
    assert_eq!(ere(r"a\B", "a ab"), "2..3");
}

#[test]
fn unicode_locale_brackets() {
    let flags = CompileFlags::ere();
    let exec = ExecFlags::new();

    assert_eq!(run_with("[[:alpha:]]+", flags, &Utf8Locale, exec, "12héllo!"), "2..8");
    assert_eq!(run_with("[[=e=]]", flags, &Utf8Locale, exec, "xë"), "1..3");
}

#[test]
fn start_offset() {
    let program = compile("a", CompileFlags::ere(), &CLocale).unwrap();
    let mut vm = VM::builder(&program, &CLocale, "aba").build();

    let captures = vm.execute(1, 1).unwrap().unwrap();
    assert_eq!(render(&captures), "2..3");
    assert_eq!(vm.execute(3, 1).unwrap(), None);
}

#[test]
fn capture_limit_truncates_report() {
    let program = compile("(a)(b)", CompileFlags::ere(), &CLocale).unwrap();
    let mut vm = VM::builder(&program, &CLocale, "ab").build();
    assert_eq!(render(&vm.execute(0, 2).unwrap().unwrap()), "0..2 0..1");
    assert_eq!(render(&vm.execute(0, 0).unwrap().unwrap()), "0..2");

    let flags = CompileFlags::ere().no_capture(true);
    let program = compile("(a)(b)", flags, &CLocale).unwrap();
    let mut vm = VM::builder(&program, &CLocale, "ab").build();
    assert_eq!(render(&vm.execute(0, usize::MAX).unwrap().unwrap()), "0..2");
}

#[test]
fn fuel_exhaustion() {
    let program = compile("a*b", CompileFlags::ere(), &CLocale).unwrap();
    let subject = "a".repeat(2000);
    let mut vm = VM::builder(&program, &CLocale, &subject).exec_fuel(100).build();

    assert_eq!(vm.execute(0, 1), Err(MatchError::ExecFuelExhausted(100)));
}

#[test]
fn fuel_resets_between_calls() {
    let program = compile("b", CompileFlags::ere(), &CLocale).unwrap();
    let mut vm = VM::builder(&program, &CLocale, "ab").exec_fuel(3).build();

    assert!(vm.execute(0, 1).unwrap().is_some());
    assert!(vm.execute(0, 1).unwrap().is_some());
}

#[test]
fn recursion_limit() {
    let program = compile("(a)*", CompileFlags::ere(), &CLocale).unwrap();
    let subject = "a".repeat(50);
    let limits = FuelLimits::new().recursion_limit(10);
    let mut vm = VM::builder(&program, &CLocale, &subject).limits(limits).build();

    assert_eq!(vm.execute(0, 1), Err(MatchError::RecursionLimitExceeded(10)));
}

#[test]
fn long_subject_backtracks_on_heap() {
    let subject = format!("{}c", "ab".repeat(1000));
    assert_eq!(ere("(a|b)*c", &subject), "0..2001 1999..2000");

    let subject = format!("{}x", "a".repeat(5000));
    assert_eq!(ere("(a)*x", &subject), "0..5001 4999..5000");
}

#[test]
fn long_subject_respects_checkpoint_limit() {
    let program = compile("(a|b)*c", CompileFlags::ere(), &CLocale).unwrap();
    let subject = format!("{}c", "ab".repeat(1000));
    let mut vm = VM::builder(&program, &CLocale, &subject).recursion_limit(64).build();

    assert_eq!(vm.execute(0, 1), Err(MatchError::RecursionLimitExceeded(64)));
}

#[test]
fn malformed_program_is_an_error() {
    let program = Program::new(
        vec![Inst::new(Atom::Literal('a'))],
        vec![GroupSpan { start: 0, end: 0 }],
        FirstByteMap::full(),
        ProgramFlags::default(),
    );
    let mut vm = VM::builder(&program, &CLocale, "a").build();

    assert!(matches!(vm.execute(0, 1), Err(MatchError::MalformedProgram(_))));
}

#[test]
fn default_limits() {
    let limits = FuelLimits::default();
    assert_eq!(limits.get_exec_fuel(), 1_000_000);
    assert_eq!(limits.get_recursion_limit(), 100_000);
}
