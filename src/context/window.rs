/*!
 * Manually adjustable sentence window.
 *
 * Automatic expansion guesses sentence boundaries from punctuation. When the
 * guess is wrong the learner widens or narrows the context one line at a
 * time. The window is anchored at the selected line: it can grow in either
 * direction up to the ends of the script and shrink back, but never past
 * the anchor.
 */

use crate::subtitle_processor::SubtitleLine;

use super::expander::{ExpandedContext, boundaries, join_span};

/// A contiguous run of lines `start..=end` that contains `anchor`.
#[derive(Debug, Clone)]
pub struct SentenceWindow<'a> {
    lines: &'a [SubtitleLine],
    anchor: usize,
    start: usize,
    end: usize,
}

impl<'a> SentenceWindow<'a> {
    /// Window covering only the anchor line
    pub fn new(lines: &'a [SubtitleLine], anchor: usize) -> Option<Self> {
        (anchor < lines.len()).then_some(Self {
            lines,
            anchor,
            start: anchor,
            end: anchor,
        })
    }

    /// Window initialised from automatic expansion around the anchor
    pub fn expanded(lines: &'a [SubtitleLine], anchor: usize, max_depth: usize) -> Option<Self> {
        let (start, end) = boundaries(anchor, lines, max_depth)?;
        Some(Self { lines, anchor, start, end })
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Inclusive `(start, end)` indices
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Number of lines in the window
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Pull in the previous line; false at the start of the script
    pub fn extend_backward(&mut self) -> bool {
        if self.start == 0 {
            return false;
        }
        self.start -= 1;
        true
    }

    /// Drop the first line; false when the window already starts at the anchor
    pub fn retract_backward(&mut self) -> bool {
        if self.start >= self.anchor {
            return false;
        }
        self.start += 1;
        true
    }

    /// Pull in the next line; false at the end of the script
    pub fn extend_forward(&mut self) -> bool {
        if self.end + 1 >= self.lines.len() {
            return false;
        }
        self.end += 1;
        true
    }

    /// Drop the last line; false when the window already ends at the anchor
    pub fn retract_forward(&mut self) -> bool {
        if self.end <= self.anchor {
            return false;
        }
        self.end -= 1;
        true
    }

    /// Lines currently covered
    pub fn lines(&self) -> &'a [SubtitleLine] {
        &self.lines[self.start..=self.end]
    }

    /// Joined text in both languages
    pub fn context(&self) -> ExpandedContext {
        join_span(self.lines, self.start, self.end)
    }
}
