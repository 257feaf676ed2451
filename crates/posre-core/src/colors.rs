//! ANSI color codes for dump and trace output.
//!
//! Four semantic colors:
//! - Blue: group markers, alternation structure
//! - Green: literal text, accepted matches
//! - Dim: offsets, repetition suffixes, metadata
//! - Reset: return to default

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes so it reads on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// Wrap `text` in the given color code, followed by a reset.
    pub fn paint(&self, code: &'static str, text: &str) -> String {
        if code.is_empty() {
            return text.to_string();
        }
        format!("{code}{text}{}", self.reset)
    }
}
