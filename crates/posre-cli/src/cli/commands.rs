//! Command builders for the CLI.
//!
//! Every command accepts the full flag set so switching between `check`,
//! `dump`, `exec` and `trace` never requires editing the rest of the line.
//! Flags a command ignores are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Flags that shape compilation.
fn with_compile_args(cmd: Command) -> Command {
    cmd.arg(pattern_arg())
        .arg(extended_arg())
        .arg(ignore_case_arg())
        .arg(newline_arg())
        .arg(nosub_arg())
        .arg(locale_arg())
        .arg(color_arg())
}

/// Subject and execution flags, hidden when `hide` is set.
fn with_exec_args(cmd: Command, hide: bool) -> Command {
    cmd.arg(subject_text_arg().hide(hide))
        .arg(subject_path_arg().hide(hide))
        .arg(notbol_arg().hide(hide))
        .arg(noteol_arg().hide(hide))
        .arg(fuel_arg().hide(hide))
        .arg(recursion_limit_arg().hide(hide))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("posre")
        .about("POSIX regular expressions with leftmost-longest matching")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .after_help(
            r#"EXAMPLES:
  posre check 'a\(b*\)c'         # basic syntax
  posre check -E '(a|b){2,3}'    # extended syntax
  posre check -E 'a[z-a]'        # prints an annotated diagnostic"#,
        );

    with_exec_args(with_compile_args(cmd), true)
        .arg(all_arg().hide(true))
        .arg(compact_arg().hide(true))
}

/// Show the compiled program.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled program")
        .after_help(
            r#"EXAMPLES:
  posre dump -E '(a|bc)*d'
  posre dump -i --locale utf8 '[[:alpha:]]x'"#,
        );

    with_exec_args(with_compile_args(cmd), true)
        .arg(all_arg().hide(true))
        .arg(compact_arg().hide(true))
}

/// Match a subject and output JSON.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Match a subject and output JSON")
        .override_usage(
            "\
  posre exec <PATTERN> <SUBJECT>
  posre exec <PATTERN> -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  posre exec -E '(foo|foobar)' 'a foobar'
  posre exec -E --all '[0-9]+' 'a1b22c333'
  posre exec -n '^b' -f notes.txt

EXIT STATUS:
  0 on a match, 1 when nothing matched, 2 on error"#,
        );

    with_exec_args(with_compile_args(cmd), false)
        .arg(all_arg())
        .arg(compact_arg())
}

/// Trace matcher execution.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace matcher execution for debugging")
        .override_usage(
            "\
  posre trace <PATTERN> <SUBJECT>
  posre trace <PATTERN> -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  posre trace -E '(a|ab)c' abc
  posre trace -E '(a*)*b' aaaa --fuel 200"#,
        );

    with_exec_args(with_compile_args(cmd), false)
        .arg(all_arg().hide(true))
        .arg(compact_arg().hide(true))
}
