use posre_lib::{CompileFlags, Regex};

use super::exec::build_report;

fn report(pattern: &str, subject: &str, all: bool) -> String {
    let regex = Regex::new(pattern, CompileFlags::ere()).unwrap();
    let matches: Vec<_> = if all {
        regex.find_iter(subject).map(Result::unwrap).collect()
    } else {
        regex.find(subject).unwrap().into_iter().collect()
    };
    serde_json::to_string_pretty(&build_report(pattern, subject, &matches)).unwrap()
}

#[test]
fn unset_group_is_null() {
    insta::assert_snapshot!(report("(a)|(b)", "xb", false), @r#"
    {
      "pattern": "(a)|(b)",
      "matches": [
        {
          "start": 1,
          "end": 2,
          "text": "b",
          "groups": [
            null,
            {
              "start": 1,
              "end": 2,
              "text": "b"
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn all_matches() {
    insta::assert_snapshot!(report("[0-9]+", "a1b22", true), @r#"
    {
      "pattern": "[0-9]+",
      "matches": [
        {
          "start": 1,
          "end": 2,
          "text": "1",
          "groups": []
        },
        {
          "start": 3,
          "end": 5,
          "text": "22",
          "groups": []
        }
      ]
    }
    "#);
}

#[test]
fn no_match_has_empty_list() {
    let json = report("z", "abc", false);
    assert_eq!(json, "{\n  \"pattern\": \"z\",\n  \"matches\": []\n}");
}
