//! Match a subject and print the result as JSON.

use posre_lib::Match;
use serde::Serialize;

use super::pattern::{PatternSpec, SubjectSpec, prepare};

pub struct ExecArgs {
    pub pattern: PatternSpec,
    pub subject: SubjectSpec,
    pub all: bool,
    pub pretty: bool,
    pub color: bool,
}

#[derive(Serialize)]
pub struct Report<'a> {
    pub pattern: &'a str,
    pub matches: Vec<MatchReport<'a>>,
}

#[derive(Serialize)]
pub struct MatchReport<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    /// One entry per reported group; `null` when the group did not participate.
    pub groups: Vec<Option<GroupReport<'a>>>,
}

#[derive(Serialize)]
pub struct GroupReport<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

pub fn build_report<'a>(pattern: &'a str, subject: &'a str, matches: &[Match<'a>]) -> Report<'a> {
    let matches = matches
        .iter()
        .map(|m| MatchReport {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
            groups: m
                .captures()
                .iter()
                .skip(1)
                .map(|span| {
                    span.map(|span| GroupReport {
                        start: span.start,
                        end: span.end,
                        text: subject.get(span.range()).unwrap_or_default(),
                    })
                })
                .collect(),
        })
        .collect();
    Report { pattern, matches }
}

pub fn run(args: ExecArgs) {
    let (regex, subject) = prepare(&args.pattern, &args.subject, args.color);
    let flags = args.subject.flags;

    let found: Result<Vec<Match<'_>>, _> = if args.all {
        regex.find_iter_with(&subject, flags).collect()
    } else {
        regex
            .find_at(&subject, 0, flags)
            .map(|m| m.into_iter().collect())
    };
    let matches = match found {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("runtime error: {e}");
            std::process::exit(2);
        }
    };

    let report = build_report(&args.pattern.text, &subject, &matches);
    let output = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }

    if matches.is_empty() {
        std::process::exit(1);
    }
}
