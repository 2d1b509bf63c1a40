use std::ops::Range;

/// An immutable, line-indexed view of a decoded document.
///
/// Line order is significant: every scanner walks lines top to bottom and
/// resolves ties by taking the first hit.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    lines: Vec<String>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text.lines().map(str::to_string).collect();
        Self { text, lines }
    }

    /// The full raw text, for whole-document pattern scans.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, i: usize) -> &str {
        &self.lines[i]
    }

    /// Ascending line indices of the window `[i - before, i + after]`,
    /// clipped to document bounds.
    pub fn window(&self, i: usize, before: usize, after: usize) -> Range<usize> {
        let start = i.saturating_sub(before);
        let end = (i + after + 1).min(self.lines.len());
        start..end
    }
}
