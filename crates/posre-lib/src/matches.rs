//! Match results and match iteration.

use posre_core::Collation;
use posre_vm::{Captures, ExecFlags, Span};
use serde::Serialize;

use crate::Result;
use crate::regex::Regex;

/// One successful match over a borrowed subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match<'s> {
    #[serde(skip)]
    subject: &'s str,
    captures: Captures,
}

impl<'s> Match<'s> {
    pub(crate) fn new(subject: &'s str, captures: Captures) -> Self {
        Self { subject, captures }
    }

    pub fn span(&self) -> Span {
        self.captures.whole()
    }

    pub fn start(&self) -> usize {
        self.span().start
    }

    pub fn end(&self) -> usize {
        self.span().end
    }

    /// Matched text.
    pub fn as_str(&self) -> &'s str {
        self.subject.get(self.span().range()).unwrap_or_default()
    }

    /// Text of `group`, or `None` when it did not take part in the match
    /// or was not reported.
    pub fn group(&self, group: usize) -> Option<&'s str> {
        let span = self.captures.get(group)?;
        self.subject.get(span.range())
    }

    pub fn group_span(&self, group: usize) -> Option<Span> {
        self.captures.get(group)
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }
}

/// Iterator over successive non-overlapping matches.
///
/// After an empty match the search resumes one character further on, so
/// the iterator always makes progress. A runtime error is yielded once and
/// ends the iteration.
pub struct Matches<'r, 's, C: Collation> {
    regex: &'r Regex<C>,
    subject: &'s str,
    flags: ExecFlags,
    next_start: Option<usize>,
}

impl<'r, 's, C: Collation> Matches<'r, 's, C> {
    pub(crate) fn new(regex: &'r Regex<C>, subject: &'s str, flags: ExecFlags) -> Self {
        Self {
            regex,
            subject,
            flags,
            next_start: Some(0),
        }
    }

    fn resume_after(&self, m: &Match<'s>) -> Option<usize> {
        if !m.span().is_empty() {
            return Some(m.end());
        }
        let width = self
            .regex
            .collation()
            .decode(self.subject, m.end())
            .map(|(_, width)| width)?;
        Some(m.end() + width)
    }
}

impl<'s, C: Collation> Iterator for Matches<'_, 's, C> {
    type Item = Result<Match<'s>>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start.take()?;
        match self.regex.find_at(self.subject, start, self.flags) {
            Ok(Some(m)) => {
                self.next_start = self.resume_after(&m);
                Some(Ok(m))
            }
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
