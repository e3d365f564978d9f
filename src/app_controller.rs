use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::context::{ExpandedContext, SentenceWindow};
use crate::errors::{ScriptError, VocabularyError};
use crate::file_utils::FileManager;
use crate::study_guide::StudyGuideRequest;
use crate::subtitle_processor::{SubtitleLine, SubtitleScript};
use crate::text::KnownWordSet;
use crate::vocab::VocabItem;

// @module: Application controller for subtitle study sessions

/// Tokens of one line that are not covered by the known-word set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownWords<'a> {
    pub line_index: usize,
    pub line_id: String,
    /// (word index, token) pairs
    pub words: Vec<(usize, &'a str)>,
}

/// Per-script result of a folder scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub path: PathBuf,
    pub lines: usize,
    pub unknown_words: usize,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Learner's known base forms, replaced wholesale on each load
    known_words: KnownWordSet,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let mut controller = Self {
            config,
            known_words: KnownWordSet::new(),
        };

        if let Some(path) = controller.config.known_words_path.clone() {
            if FileManager::file_exists(&path) {
                controller.load_vocabulary(&path)?;
            } else {
                warn!("Known words file not found: {:?}", path);
            }
        }

        Ok(controller)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn known_words(&self) -> &KnownWordSet {
        &self.known_words
    }

    /// Replace the known-word set
    pub fn set_known_words(&mut self, known_words: KnownWordSet) {
        self.known_words = known_words;
    }

    /// Load a newline-delimited vocabulary, replacing the current set.
    ///
    /// Returns the number of distinct words loaded.
    pub fn load_vocabulary<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let text = FileManager::read_to_string(path)
            .map_err(|_| VocabularyError::Unreadable(path.to_path_buf()))?;

        let known_words = KnownWordSet::from_text(&text);
        if known_words.is_empty() {
            return Err(VocabularyError::Empty(path.to_path_buf()).into());
        }

        let count = known_words.len();
        self.set_known_words(known_words);
        Ok(count)
    }

    /// Read and parse a script, failing when nothing learnable is in it
    pub fn load_script<P: AsRef<Path>>(&self, path: P) -> Result<SubtitleScript> {
        let path = path.as_ref();
        if !FileManager::is_script_file(path) {
            warn!("{:?} does not have a .ass/.ssa extension, parsing anyway", path);
        }
        let content = FileManager::read_to_string(path)
            .map_err(|_| ScriptError::Unreadable(path.to_path_buf()))?;

        let script = SubtitleScript::parse(path, &content);
        if script.is_empty() {
            return Err(ScriptError::NoDialogue(path.to_path_buf()).into());
        }

        debug!("Loaded {} lines from {:?}", script.len(), path);
        Ok(script)
    }

    /// Tokens to highlight, for every line that has at least one
    pub fn unknown_words<'a>(&self, lines: &'a [SubtitleLine]) -> Vec<UnknownWords<'a>> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(line_index, line)| {
                let words: Vec<(usize, &'a str)> = line
                    .tokens()
                    .into_iter()
                    .enumerate()
                    .filter(|(_, token)| self.known_words.should_highlight(token))
                    .collect();

                (!words.is_empty()).then(|| UnknownWords {
                    line_index,
                    line_id: line.id(),
                    words,
                })
            })
            .collect()
    }

    /// Automatic sentence window around a line
    pub fn window_for<'a>(&self, lines: &'a [SubtitleLine], line_index: usize) -> Option<SentenceWindow<'a>> {
        SentenceWindow::expanded(lines, line_index, self.config.learning.max_context_depth)
    }

    /// Expanded sentence around a line; empty when the index is out of range
    pub fn context_for(&self, lines: &[SubtitleLine], line_index: usize) -> ExpandedContext {
        crate::context::expand(line_index, lines, self.config.learning.max_context_depth)
    }

    /// Capture a selected token as a vocabulary item
    pub fn capture(&self, lines: &[SubtitleLine], line_index: usize, word_index: usize) -> Option<VocabItem> {
        VocabItem::capture(lines, line_index, word_index, &self.config.learning)
    }

    /// Study-guide request for the captured items
    pub fn study_guide_request(&self, items: &[VocabItem]) -> Option<StudyGuideRequest> {
        StudyGuideRequest::from_vocab(items, &self.config.target_language_name())
    }

    /// Parse every script under a directory; unreadable scripts are logged and skipped
    pub fn scan_folder<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<ScanSummary>> {
        let dir = dir.as_ref();
        let scripts = FileManager::find_scripts(dir)?;
        info!("Found {} script(s) in {:?}", scripts.len(), dir);

        let mut summaries = Vec::with_capacity(scripts.len());
        for path in scripts {
            match self.load_script(&path) {
                Ok(script) => {
                    let unknown_words = self
                        .unknown_words(&script.lines)
                        .iter()
                        .map(|u| u.words.len())
                        .sum();
                    summaries.push(ScanSummary {
                        path,
                        lines: script.len(),
                        unknown_words,
                    });
                }
                Err(e) => error!("Skipping {:?}: {}", path, e),
            }
        }

        Ok(summaries)
    }
}
