//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same definition is reused across commands, hidden with `.hide(true)`
//! where a command accepts but ignores it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Regular expression")
}

/// Subject text (positional).
pub fn subject_text_arg() -> Arg {
    Arg::new("subject_text")
        .value_name("SUBJECT")
        .help("Text to search")
}

/// Subject file (-f/--file).
pub fn subject_path_arg() -> Arg {
    Arg::new("subject_path")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("subject_text")
        .help("Read the subject from a file (use \"-\" for stdin)")
}

/// Extended syntax (-E/--extended).
pub fn extended_arg() -> Arg {
    Arg::new("extended")
        .short('E')
        .long("extended")
        .action(ArgAction::SetTrue)
        .help("Use extended (ERE) syntax instead of basic (BRE)")
}

/// Case-insensitive matching (-i/--ignore-case).
pub fn ignore_case_arg() -> Arg {
    Arg::new("ignore_case")
        .short('i')
        .long("ignore-case")
        .action(ArgAction::SetTrue)
        .help("Ignore case distinctions")
}

/// Newline-sensitive matching (-n/--newline).
pub fn newline_arg() -> Arg {
    Arg::new("newline")
        .short('n')
        .long("newline")
        .action(ArgAction::SetTrue)
        .help("Treat newline as a line separator for `.`, `[^...]`, `^` and `$`")
}

/// Report only the whole match (--nosub).
pub fn nosub_arg() -> Arg {
    Arg::new("nosub")
        .long("nosub")
        .action(ArgAction::SetTrue)
        .help("Report only the whole-match span")
}

/// Subject start is not a line start (--notbol).
pub fn notbol_arg() -> Arg {
    Arg::new("notbol")
        .long("notbol")
        .action(ArgAction::SetTrue)
        .help("The subject start is not the beginning of a line")
}

/// Subject end is not a line end (--noteol).
pub fn noteol_arg() -> Arg {
    Arg::new("noteol")
        .long("noteol")
        .action(ArgAction::SetTrue)
        .help("The subject end is not the end of a line")
}

/// Collation (--locale).
pub fn locale_arg() -> Arg {
    Arg::new("locale")
        .long("locale")
        .value_name("LOCALE")
        .default_value("c")
        .value_parser(["c", "utf8"])
        .help("Collation used for brackets and case folding")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Report every match (--all).
pub fn all_arg() -> Arg {
    Arg::new("all")
        .short('a')
        .long("all")
        .action(ArgAction::SetTrue)
        .help("Report every non-overlapping match, not just the first")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Execution fuel limit")
}

/// Pending backtrack checkpoint limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("100000")
        .value_parser(value_parser!(u32))
        .help("Maximum number of pending backtrack checkpoints")
}
