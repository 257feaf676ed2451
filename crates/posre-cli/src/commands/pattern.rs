//! Pattern compilation and subject loading shared by every command.

use std::io::Read;
use std::path::PathBuf;

use posre_lib::{CLocale, Collation, CompileFlags, Error, ExecFlags, FuelLimits, Regex, Utf8Locale};

/// Collation selected with `--locale`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    C,
    Utf8,
}

impl Locale {
    pub fn collation(self) -> &'static dyn Collation {
        match self {
            Locale::C => &CLocale,
            Locale::Utf8 => &Utf8Locale,
        }
    }
}

/// Pattern text plus everything that shapes its compilation.
#[derive(Clone, Debug)]
pub struct PatternSpec {
    pub text: String,
    pub flags: CompileFlags,
    pub locale: Locale,
}

/// Where the subject comes from and how it is searched.
#[derive(Clone, Debug)]
pub struct SubjectSpec {
    pub text: Option<String>,
    pub path: Option<PathBuf>,
    pub flags: ExecFlags,
    pub limits: FuelLimits,
}

pub type CliRegex = Regex<&'static dyn Collation>;

/// Compile the pattern, or return the rendered diagnostic.
pub fn compile(spec: &PatternSpec, color: bool) -> Result<CliRegex, String> {
    Regex::builder(&spec.text)
        .flags(spec.flags)
        .build_with(spec.locale.collation())
        .map_err(|err| match err {
            Error::Compile(err) => err.render(&spec.text, color),
            other => format!("error: {other}"),
        })
}

/// Why the subject could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum SubjectError {
    #[error("a subject is required (pass SUBJECT or --file)")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn load_subject(spec: &SubjectSpec) -> Result<String, SubjectError> {
    match (&spec.text, &spec.path) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(SubjectError::Stdin)?;
            Ok(buf)
        }
        (None, Some(path)) => std::fs::read_to_string(path).map_err(|source| SubjectError::File {
            path: path.clone(),
            source,
        }),
        (None, None) => Err(SubjectError::Missing),
    }
}

/// Compile and load, exiting with status 2 on failure.
pub fn prepare(pattern: &PatternSpec, subject: &SubjectSpec, color: bool) -> (CliRegex, String) {
    let regex = match compile(pattern, color) {
        Ok(regex) => regex.with_limits(subject.limits),
        Err(rendered) => {
            eprint!("{rendered}");
            std::process::exit(2);
        }
    };
    let text = match load_subject(subject) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    (regex, text)
}
