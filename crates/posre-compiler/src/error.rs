//! Compile errors and their rendering.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

/// Why a pattern was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileErrorKind {
    #[error("repetition operator has nothing to repeat")]
    BadRepetition,

    #[error("unmatched parenthesis")]
    UnmatchedParen,

    #[error("unmatched [ or [^")]
    UnmatchedBracket,

    #[error("malformed [: :], [= =] or [. .] token")]
    BadBracketToken,

    #[error("unknown character class name")]
    UnknownClass,

    #[error("invalid collating element")]
    InvalidCollatingElement,

    #[error("range end point precedes start point")]
    RangeOutOfOrder,

    #[error("back-reference to a group that is not closed")]
    InvalidBackReference,

    #[error("invalid interval bounds")]
    BadInterval,

    #[error("`$` anchor must be last in its alternative")]
    AnchorNotLast,

    #[error("trailing backslash")]
    TrailingBackslash,

    #[error("pattern too large")]
    PatternTooLarge,
}

impl CompileErrorKind {
    /// Short annotation placed under the offending text.
    fn label(self) -> &'static str {
        match self {
            CompileErrorKind::BadRepetition => "quantifier without operand",
            CompileErrorKind::UnmatchedParen => "this parenthesis is never matched",
            CompileErrorKind::UnmatchedBracket => "bracket expression starts here",
            CompileErrorKind::BadBracketToken => "token is not terminated",
            CompileErrorKind::UnknownClass => "not a POSIX class",
            CompileErrorKind::InvalidCollatingElement => "unknown collating element",
            CompileErrorKind::RangeOutOfOrder => "descending range",
            CompileErrorKind::InvalidBackReference => "group not available here",
            CompileErrorKind::BadInterval => "interval starts here",
            CompileErrorKind::AnchorNotLast => "atom follows `$`",
            CompileErrorKind::TrailingBackslash => "nothing to escape",
            CompileErrorKind::PatternTooLarge => "limit reached here",
        }
    }
}

/// A compile failure at a byte offset of the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct CompileError {
    pub offset: usize,
    pub kind: CompileErrorKind,
}

impl CompileError {
    pub fn new(offset: usize, kind: CompileErrorKind) -> Self {
        Self { offset, kind }
    }

    /// Render the error as an annotated snippet of `pattern`.
    pub fn render(&self, pattern: &str, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.kind.to_string();
        let snippet = Snippet::source(pattern).line_start(1).annotation(
            AnnotationKind::Primary
                .span(self.span(pattern))
                .label(self.kind.label()),
        );
        let report = vec![Level::ERROR.primary_title(&message).element(snippet)];
        renderer.render(&report).to_string()
    }

    /// Byte range covering the character at `offset`.
    fn span(&self, pattern: &str) -> std::ops::Range<usize> {
        let start = self.offset.min(pattern.len());
        let width = pattern
            .get(start..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        start..start + width
    }
}
