//! Capture slots and reported spans.

use serde::Serialize;

/// Half-open byte range `[start, end)` of the subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Scratch state for one group during a match attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Slot {
    /// Completed iterations of a repeated group.
    pub count: u32,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl Slot {
    pub fn span(&self) -> Option<Span> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => Some(Span::new(start, end)),
            _ => None,
        }
    }
}

pub(crate) type Slots = Vec<Slot>;

/// Result of a successful match: the whole match plus one entry per
/// reported group. A group that did not participate is `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Captures {
    spans: Vec<Option<Span>>,
}

impl Captures {
    pub(crate) fn from_slots(slots: &[Slot], limit: usize) -> Self {
        let spans = slots.iter().take(limit.max(1)).map(Slot::span).collect();
        Self { spans }
    }

    /// Span of the whole match.
    pub fn whole(&self) -> Span {
        self.spans
            .first()
            .copied()
            .flatten()
            .unwrap_or(Span::new(0, 0))
    }

    pub fn get(&self, group: usize) -> Option<Span> {
        self.spans.get(group).copied().flatten()
    }

    /// Number of reported entries, the whole match included.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Span>> + '_ {
        self.spans.iter().copied()
    }
}
