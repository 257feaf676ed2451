use posre_compiler::CompileFlags;
use posre_vm::{FuelLimits, MatchError};

use crate::{Error, Regex};

fn all(pattern: &str, subject: &str) -> Vec<String> {
    let re = Regex::new(pattern, CompileFlags::ere()).unwrap();
    re.find_iter(subject)
        .map(|m| {
            let m = m.unwrap();
            format!("{}..{} {:?}", m.start(), m.end(), m.as_str())
        })
        .collect()
}

#[test]
fn non_overlapping_matches() {
    assert_eq!(
        all("[0-9]+", "a1b22c333"),
        ["1..2 \"1\"", "3..5 \"22\"", "6..9 \"333\""]
    );
}

#[test]
fn empty_matches_advance_one_char() {
    assert_eq!(
        all("a*", "béaa"),
        ["0..0 \"\"", "1..1 \"\"", "3..5 \"aa\"", "5..5 \"\""]
    );
}

#[test]
fn no_matches() {
    assert!(all("z", "abc").is_empty());
    assert!(all("z", "").is_empty());
}

#[test]
fn empty_subject_has_one_empty_match() {
    assert_eq!(all("x*", ""), ["0..0 \"\""]);
}

#[test]
fn later_matches_are_not_at_line_start() {
    assert_eq!(all("^a", "aaa"), ["0..1 \"a\""]);
}

#[test]
fn error_ends_iteration() {
    let re = Regex::new("(a*)*b", CompileFlags::ere())
        .unwrap()
        .with_limits(FuelLimits::new().exec_fuel(20));
    let subject = "a".repeat(20);
    let mut iter = re.find_iter(&subject);

    assert_eq!(
        iter.next(),
        Some(Err(Error::Match(MatchError::ExecFuelExhausted(20))))
    );
    assert_eq!(iter.next(), None);
}
