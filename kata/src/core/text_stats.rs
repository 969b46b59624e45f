use std::fmt;

/// Line and word counts of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub lines: usize,
    pub words: usize,
}

impl TextStats {
    /// A final line without a trailing newline still counts.
    pub fn of(text: &str) -> Self {
        Self {
            lines: text.lines().count(),
            words: text.split_whitespace().count(),
        }
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lines={} words={}", self.lines, self.words)
    }
}
