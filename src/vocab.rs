/*!
 * Vocabulary capture.
 *
 * A `VocabItem` records a word the learner selected together with the
 * sentence it appeared in. Items are later grouped per subtitle line for
 * review and handed to the study-guide layer.
 */

use serde::{Deserialize, Serialize};

use crate::app_config::LearningConfig;
use crate::context::{boundaries, expand};
use crate::subtitle_processor::{SubtitleLine, display_timestamp};

/// A selected word with its sentence context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    /// The word as selected, punctuation removed
    pub word: String,

    /// Target-language sentence
    pub context: String,

    /// Reference translation of the sentence
    pub translation: String,

    /// Start time of the originating line
    pub timestamp: String,

    /// Identifier of the originating line
    pub line_id: String,

    /// Position of the token within the line (0-based)
    pub word_index: usize,
}

/// Strip everything except ASCII alphanumerics, `_` and `'` from a selected token
pub fn clean_selection(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '\'')
        .collect()
}

impl VocabItem {
    /// Capture the token at `word_index` of line `line_index`.
    ///
    /// Returns `None` for an invalid position or a token with no word characters.
    pub fn capture(
        lines: &[SubtitleLine],
        line_index: usize,
        word_index: usize,
        settings: &LearningConfig,
    ) -> Option<Self> {
        let line = lines.get(line_index)?;
        let token = line.tokens().get(word_index).copied()?;

        let word = clean_selection(token);
        if word.is_empty() {
            return None;
        }

        let (context, translation) = if settings.auto_expand_context {
            let expanded = expand(line_index, lines, settings.max_context_depth);
            (expanded.target_text, expanded.reference_text)
        } else {
            (line.target_text.clone(), line.reference_text.clone())
        };

        Some(VocabItem {
            word,
            context,
            translation,
            timestamp: line.start_time.clone(),
            line_id: line.id(),
            word_index,
        })
    }

    /// Selection key unique per token position, e.g. `sub-4-2`
    pub fn selection_key(&self) -> String {
        format!("{}-{}", self.line_id, self.word_index)
    }
}

/// Key shared by every line of the same expanded sentence, e.g. `sub-3..sub-5`
pub fn sentence_key(line_index: usize, lines: &[SubtitleLine], max_depth: usize) -> Option<String> {
    let (start, end) = boundaries(line_index, lines, max_depth)?;
    Some(format!("{}..{}", lines[start].id(), lines[end].id()))
}

/// Vocabulary items that came from the same subtitle line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabGroup {
    pub line_id: String,

    /// Timestamp without fractional seconds
    pub timestamp: String,

    pub context: String,

    pub translation: String,

    /// Distinct words, in selection order
    pub words: Vec<String>,
}

/// Collapse items by originating line, keeping first-seen order and distinct words
pub fn group_by_line(items: &[VocabItem]) -> Vec<VocabGroup> {
    let mut groups: Vec<VocabGroup> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|g| g.line_id == item.line_id) {
            Some(group) => {
                if !group.words.contains(&item.word) {
                    group.words.push(item.word.clone());
                }
            }
            None => groups.push(VocabGroup {
                line_id: item.line_id.clone(),
                timestamp: display_timestamp(&item.timestamp).to_string(),
                context: item.context.clone(),
                translation: item.translation.clone(),
                words: vec![item.word.clone()],
            }),
        }
    }

    groups
}
