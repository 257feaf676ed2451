//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: every command accepts the full flag set
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, exec_command, trace_command};
use crate::commands::pattern::Locale;

#[test]
fn check_accepts_exec_flags() {
    let result = check_command().try_get_matches_from([
        "check", "-E", "a+", "subject", "--fuel", "10", "--notbol", "--compact",
    ]);
    assert!(
        result.is_ok(),
        "check should accept exec flags: {:?}",
        result.err()
    );

    let params = CheckParams::from_matches(&result.unwrap());
    assert_eq!(params.pattern.text, "a+");
    assert!(params.pattern.flags.extended);
}

#[test]
fn dump_extracts_compile_flags() {
    let m = dump_command()
        .try_get_matches_from(["dump", "-i", "-n", "--nosub", "--locale", "utf8", "x"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert!(!params.pattern.flags.extended);
    assert!(params.pattern.flags.ignore_case);
    assert!(params.pattern.flags.newline_sensitive);
    assert!(params.pattern.flags.no_capture);
    assert_eq!(params.pattern.locale, Locale::Utf8);
}

#[test]
fn exec_extracts_subject_and_limits() {
    let m = exec_command()
        .try_get_matches_from([
            "exec",
            "-E",
            "(a|b)",
            "abc",
            "--all",
            "--noteol",
            "--fuel",
            "500",
            "--recursion-limit",
            "64",
            "--color",
            "never",
        ])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.subject.text.as_deref(), Some("abc"));
    assert_eq!(params.subject.path, None);
    assert!(params.all);
    assert!(!params.subject.flags.not_bol);
    assert!(params.subject.flags.not_eol);
    assert_eq!(params.subject.limits.get_exec_fuel(), 500);
    assert_eq!(params.subject.limits.get_recursion_limit(), 64);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn exec_defaults() {
    let m = exec_command()
        .try_get_matches_from(["exec", "a", "-f", "notes.txt"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.subject.path, Some(PathBuf::from("notes.txt")));
    assert_eq!(params.subject.limits.get_exec_fuel(), 1_000_000);
    assert_eq!(params.subject.limits.get_recursion_limit(), 100_000);
    assert_eq!(params.pattern.locale, Locale::C);
    assert_eq!(params.color, ColorChoice::Auto);
    assert!(!params.compact);
}

#[test]
fn subject_text_and_file_conflict() {
    let result = trace_command().try_get_matches_from(["trace", "a", "abc", "-f", "x.txt"]);
    assert!(result.is_err());
}

#[test]
fn pattern_is_required() {
    assert!(check_command().try_get_matches_from(["check"]).is_err());
}

#[test]
fn unknown_locale_rejected() {
    let result = dump_command().try_get_matches_from(["dump", "a", "--locale", "fr"]);
    assert!(result.is_err());
}

#[test]
fn dump_help_hides_exec_flags() {
    let help = dump_command().render_help().to_string();
    assert!(help.contains("--extended"));
    assert!(!help.contains("--fuel"));
    assert!(!help.contains("--notbol"));
}

#[test]
fn exec_help_shows_exec_flags() {
    let help = exec_command().render_help().to_string();
    assert!(help.contains("--fuel"));
    assert!(help.contains("--all"));
    assert!(help.contains("--recursion-limit"));
}

#[test]
fn color_choice_from_arg() {
    assert_eq!(ColorChoice::from_arg(Some("always")), ColorChoice::Always);
    assert_eq!(ColorChoice::from_arg(Some("never")), ColorChoice::Never);
    assert_eq!(ColorChoice::from_arg(Some("rainbow")), ColorChoice::Auto);
    assert_eq!(ColorChoice::from_arg(None), ColorChoice::Auto);

    assert!(ColorChoice::Always.enabled_for(Stream::Stdout));
    assert!(!ColorChoice::Never.enabled_for(Stream::Stderr));
}
