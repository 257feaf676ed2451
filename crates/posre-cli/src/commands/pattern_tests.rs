use std::path::PathBuf;

use posre_lib::{CompileFlags, ExecFlags, FuelLimits};

use super::pattern::{Locale, PatternSpec, SubjectError, SubjectSpec, compile, load_subject};

fn spec(text: &str, flags: CompileFlags, locale: Locale) -> PatternSpec {
    PatternSpec {
        text: text.to_string(),
        flags,
        locale,
    }
}

fn subject(text: Option<&str>, path: Option<&str>) -> SubjectSpec {
    SubjectSpec {
        text: text.map(str::to_string),
        path: path.map(PathBuf::from),
        flags: ExecFlags::default(),
        limits: FuelLimits::default(),
    }
}

#[test]
fn compile_uses_selected_locale() {
    let c = compile(&spec("[[:alpha:]]", CompileFlags::ere(), Locale::C), false).unwrap();
    assert!(!c.is_match("é").unwrap());

    let utf8 = compile(&spec("[[:alpha:]]", CompileFlags::ere(), Locale::Utf8), false).unwrap();
    assert!(utf8.is_match("é").unwrap());
}

#[test]
fn compile_error_is_rendered() {
    let Err(rendered) = compile(&spec("a\\(b", CompileFlags::bre(), Locale::C), false) else {
        panic!("pattern should be rejected");
    };
    assert!(rendered.contains("unmatched parenthesis"));
    assert!(rendered.contains("a\\(b"));
}

#[test]
fn subject_text_wins() {
    assert_eq!(load_subject(&subject(Some("abc"), None)).unwrap(), "abc");
}

#[test]
fn missing_subject() {
    let err = load_subject(&subject(None, None)).unwrap_err();
    assert!(matches!(err, SubjectError::Missing));
    assert!(err.to_string().contains("subject is required"));
}

#[test]
fn unreadable_file() {
    let err = load_subject(&subject(None, Some("/nonexistent/posre-subject"))).unwrap_err();
    assert!(matches!(err, SubjectError::File { .. }));
    assert!(err.to_string().starts_with("failed to read /nonexistent/posre-subject: "));
}
