/*!
 * Sentence context expansion.
 *
 * A subtitle line is often a clause fragment. Expansion grows a line into
 * the sentence it belongs to by scanning neighbouring lines for
 * sentence-ending punctuation, bounded by a maximum depth on each side.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::subtitle_processor::SubtitleLine;

/// Default number of lines scanned on each side of the selected line
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// `.`, `?` or `!`, optionally followed by a closing quote, then trailing whitespace
static TERMINATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.?!]["']?\s*$"#).unwrap()
});

/// Whether text closes its sentence
pub fn ends_with_terminator(text: &str) -> bool {
    TERMINATOR_REGEX.is_match(text)
}

/// The full sentence around a line, in both languages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedContext {
    /// Space-joined target text of every line in the window
    pub target_text: String,

    /// Space-joined reference text, lines without a translation skipped
    pub reference_text: String,
}

/// Compute the sentence window `(start, end)` around `line_index`, inclusive.
///
/// Returns `None` when `line_index` is out of range.
pub fn boundaries(line_index: usize, lines: &[SubtitleLine], max_depth: usize) -> Option<(usize, usize)> {
    if line_index >= lines.len() {
        return None;
    }

    // Walk back while the preceding line leaves its sentence open
    let mut start = line_index;
    let mut depth = 0;
    while start > 0 && depth < max_depth {
        if ends_with_terminator(&lines[start - 1].target_text) {
            break;
        }
        start -= 1;
        depth += 1;
    }

    // Walk forward until the current end line closes the sentence
    let mut end = line_index;
    depth = 0;
    while end + 1 < lines.len() && depth < max_depth {
        if ends_with_terminator(&lines[end].target_text) {
            break;
        }
        end += 1;
        depth += 1;
    }

    Some((start, end))
}

/// Join the texts of lines `start..=end`.
///
/// Callers guarantee `start <= end < lines.len()`.
pub(crate) fn join_span(lines: &[SubtitleLine], start: usize, end: usize) -> ExpandedContext {
    let span = &lines[start..=end];

    let target_text = span
        .iter()
        .map(|l| l.target_text.trim())
        .collect::<Vec<_>>()
        .join(" ");

    let reference_text = span
        .iter()
        .filter(|l| !l.reference_text.is_empty())
        .map(|l| l.reference_text.trim())
        .collect::<Vec<_>>()
        .join(" ");

    ExpandedContext { target_text, reference_text }
}

/// Expand the line at `line_index` into its full sentence.
///
/// An out-of-range index yields an empty pair.
pub fn expand(line_index: usize, lines: &[SubtitleLine], max_depth: usize) -> ExpandedContext {
    match boundaries(line_index, lines, max_depth) {
        Some((start, end)) => join_span(lines, start, end),
        None => ExpandedContext::default(),
    }
}
