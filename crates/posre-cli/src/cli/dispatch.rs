//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap, one per command
//! - `from_matches()` extractors that pull only the fields a command uses
//! - `Into<*Args>` impls bridging dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use posre_lib::{CompileFlags, ExecFlags, FuelLimits};

use super::{ColorChoice, Stream};
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::pattern::{Locale, PatternSpec, SubjectSpec};
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub pattern: PatternSpec,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.enabled_for(Stream::Stderr),
        }
    }
}

pub struct DumpParams {
    pub pattern: PatternSpec,
    pub color: ColorChoice,
    // Subject, execution and output flags are parsed but not extracted.
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.enabled_for(Stream::Stdout),
        }
    }
}

pub struct ExecParams {
    pub pattern: PatternSpec,
    pub subject: SubjectSpec,
    pub all: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            subject: parse_subject(m),
            all: m.get_flag("all"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());
        Self {
            pattern: p.pattern,
            subject: p.subject,
            all: p.all,
            pretty,
            color: p.color.enabled_for(Stream::Stderr),
        }
    }
}

pub struct TraceParams {
    pub pattern: PatternSpec,
    pub subject: SubjectSpec,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            subject: parse_subject(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            pattern: p.pattern,
            subject: p.subject,
            color: p.color.enabled_for(Stream::Stdout),
        }
    }
}

fn parse_pattern(m: &ArgMatches) -> PatternSpec {
    let flags = if m.get_flag("extended") {
        CompileFlags::ere()
    } else {
        CompileFlags::bre()
    };
    PatternSpec {
        text: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
        flags: flags
            .ignore_case(m.get_flag("ignore_case"))
            .newline_sensitive(m.get_flag("newline"))
            .no_capture(m.get_flag("nosub")),
        locale: parse_locale(m),
    }
}

fn parse_subject(m: &ArgMatches) -> SubjectSpec {
    let limits = FuelLimits::new()
        .exec_fuel(m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000))
        .recursion_limit(m.get_one::<u32>("recursion_limit").copied().unwrap_or(100_000));
    SubjectSpec {
        text: m.get_one::<String>("subject_text").cloned(),
        path: m.get_one::<PathBuf>("subject_path").cloned(),
        flags: ExecFlags::new()
            .not_bol(m.get_flag("notbol"))
            .not_eol(m.get_flag("noteol")),
        limits,
    }
}

fn parse_locale(m: &ArgMatches) -> Locale {
    match m.get_one::<String>("locale").map(|s| s.as_str()) {
        Some("utf8") => Locale::Utf8,
        _ => Locale::C,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    ColorChoice::from_arg(m.get_one::<String>("color").map(String::as_str))
}
