use indoc::indoc;
use posre_compiler::{CompileFlags, compile};
use posre_core::{CLocale, Colors};

use super::{PrintTracer, VM};

fn trace(pattern: &str, subject: &str) -> String {
    let program = compile(pattern, CompileFlags::ere(), &CLocale).unwrap();
    let mut tracer = PrintTracer::new(&program, Colors::OFF);
    let mut vm = VM::builder(&program, &CLocale, subject).build();
    vm.execute_with(0, usize::MAX, &mut tracer).unwrap();
    tracer.render()
}

#[test]
fn skipped_start_positions_are_not_attempted() {
    insta::assert_snapshot!(trace("ab", "xab"), @r#"
    attempt @1
      0  str "ab"  @1
      1  end  @3
    accept 1..3
    "#);
}

#[test]
fn alternation_reports_each_branch() {
    insta::assert_snapshot!(trace("a|b", "b"), @r"
    attempt @0
      0  alt +3  @0
      1  char 'a'  @0
      0  branch failed
      4  char 'b'  @0
      5  alt end  @1
      6  end  @1
      3  branch ok, match ends @1
    accept 0..1
    ");
}

#[test]
fn optional_group_backtracks_to_skip() {
    let expected = indoc! {r#"
        attempt @0
          0  open #1?  @0
            enter #1 @0
          1  char 'a'  @0
          2  close #1?  @1
            exit #1 @1
          3  str "ab"  @1
          0  backtrack @0
          3  str "ab"  @0
          4  end  @2
        accept 0..2
    "#};
    assert_eq!(trace("(a)?ab", "ab"), expected);
}

#[test]
fn colored_accept_line() {
    let program = compile("a", CompileFlags::ere(), &CLocale).unwrap();
    let mut tracer = PrintTracer::new(&program, Colors::ON);
    let mut vm = VM::builder(&program, &CLocale, "a").build();
    vm.execute_with(0, 1, &mut tracer).unwrap();

    let last = tracer.lines().last().unwrap();
    assert_eq!(last, "\x1b[32maccept 0..1\x1b[0m");
}
