use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::file_utils::FileManager;
use crate::language_utils::{has_chinese, has_target_language, strip_tags};

// @module: Bilingual subtitle script parsing

// @const: Inline line-break marker (\N or \n) inside the text field
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\\N").unwrap()
});

/// Timestamp used when a row's Start or End field cannot be located
pub const DEFAULT_TIMESTAMP: &str = "0:00:00.00";

/// Field layout assumed until a `Format:` line is seen in the events section
pub const DEFAULT_EVENT_FORMAT: [&str; 10] = [
    "Layer", "Start", "End", "Style", "Name", "MarginL", "MarginR", "MarginV", "Effect", "Text",
];

// @struct: One dialogue event of the script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleLine {
    // @field: Sequence number, assigned in parse order to kept lines only
    pub seq_num: usize,

    // @field: Start timestamp, verbatim from the script
    pub start_time: String,

    // @field: End timestamp, verbatim from the script
    pub end_time: String,

    // @field: Learner's target-language text, never empty for a parsed line
    pub target_text: String,

    // @field: Reference translation, may be empty
    pub reference_text: String,
}

impl SubtitleLine {
    /// Creates a new subtitle line
    pub fn new(
        seq_num: usize,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        target_text: impl Into<String>,
        reference_text: impl Into<String>,
    ) -> Self {
        SubtitleLine {
            seq_num,
            start_time: start_time.into(),
            end_time: end_time.into(),
            target_text: target_text.into(),
            reference_text: reference_text.into(),
        }
    }

    /// Stable string identifier, e.g. `sub-12`
    pub fn id(&self) -> String {
        format!("sub-{}", self.seq_num)
    }

    /// Whitespace-separated tokens of the target text; the position is the word index
    pub fn tokens(&self) -> Vec<&str> {
        self.target_text.split_whitespace().collect()
    }

    /// Start time without the fractional part (`0:01:02.50` -> `0:01:02`)
    pub fn display_time(&self) -> &str {
        display_timestamp(&self.start_time)
    }
}

impl fmt::Display for SubtitleLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.display_time(), self.target_text)?;
        if !self.reference_text.is_empty() {
            write!(f, " | {}", self.reference_text)?;
        }
        Ok(())
    }
}

/// Truncate a timestamp at its first `.`
pub fn display_timestamp(timestamp: &str) -> &str {
    timestamp.split('.').next().unwrap_or(timestamp)
}

// @struct: Field positions required to read a dialogue row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldPositions {
    text: usize,
    start: usize,
    end: usize,
}

impl FieldPositions {
    // @returns: None when the layout lacks Text, Start or End
    fn locate<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        let position = |name: &str| fields.iter().position(|f| f.as_ref() == name);
        Some(FieldPositions {
            text: position("Text")?,
            start: position("Start")?,
            end: position("End")?,
        })
    }
}

// @struct: Cleaned text segment with its script classification
struct Segment {
    clean: String,
    has_chinese: bool,
    has_target: bool,
}

impl Segment {
    fn analyze(raw: &str) -> Self {
        let clean = strip_tags(raw).trim().to_string();
        Segment {
            has_chinese: has_chinese(&clean),
            has_target: has_target_language(&clean),
            clean,
        }
    }
}

fn join_segments<'a>(segments: impl Iterator<Item = &'a Segment>) -> String {
    segments
        .map(|s| s.clean.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a dialogue text payload into (target text, reference text).
///
/// Segments are separated by `\N`. Chinese-bearing segments become the
/// reference; the rest become the target. When every segment carries
/// Chinese, the whole text is the reference and is also used as target
/// only if some segment also carries Latin words. Without any Chinese, a
/// text with no Latin letter yields an empty target.
pub fn classify_text(text: &str) -> (String, String) {
    let segments: Vec<Segment> = LINE_BREAK_REGEX.split(text).map(Segment::analyze).collect();

    let chinese_count = segments.iter().filter(|s| s.has_chinese).count();
    let other_count = segments.len() - chinese_count;

    if chinese_count > 0 && other_count > 0 {
        let target = join_segments(segments.iter().filter(|s| !s.has_chinese));
        let reference = join_segments(segments.iter().filter(|s| s.has_chinese));
        (target, reference)
    } else if other_count == 0 {
        let reference = join_segments(segments.iter());
        let target = if segments.iter().any(|s| s.has_target) {
            reference.clone()
        } else {
            String::new()
        };
        (target, reference)
    } else {
        let target = join_segments(segments.iter());
        // Digits and punctuation alone carry nothing to learn from
        if target.chars().any(|c| c.is_ascii_alphabetic()) {
            (target, String::new())
        } else {
            (String::new(), String::new())
        }
    }
}

/// Split a row body at the comma that ends field `text_index - 1`.
///
/// Returns (metadata, text). Commas after the split belong to the text.
fn split_at_text_field(body: &str, text_index: usize) -> Option<(&str, &str)> {
    let mut commas = 0;
    for (i, c) in body.char_indices() {
        if c == ',' {
            commas += 1;
            if commas == text_index {
                return Some((&body[..i], &body[i + 1..]));
            }
        }
    }
    None
}

fn metadata_field<'a>(values: &[&'a str], index: usize) -> &'a str {
    values
        .get(index)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_TIMESTAMP)
}

/// Parse a subtitle script into its ordered learnable lines.
///
/// Malformed rows and rows without target-language text are skipped; the
/// parser never fails.
pub fn parse_script(content: &str) -> Vec<SubtitleLine> {
    let mut lines = Vec::new();
    let mut in_events = false;
    let mut format: Vec<String> = DEFAULT_EVENT_FORMAT.iter().map(|f| f.to_string()).collect();
    let mut dropped = 0;

    for (line_number, raw_line) in content.lines().enumerate() {
        let trimmed = raw_line.trim().trim_start_matches('\u{FEFF}');
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('[') {
            in_events = trimmed.eq_ignore_ascii_case("[Events]");
            continue;
        }

        if !in_events {
            continue;
        }

        if let Some(declaration) = trimmed.strip_prefix("Format:") {
            format = declaration.split(',').map(|f| f.trim().to_string()).collect();
            continue;
        }

        let Some(body) = trimmed.strip_prefix("Dialogue:") else {
            continue;
        };
        let body = body.trim();

        let Some(positions) = FieldPositions::locate(&format) else {
            debug!("Line {}: format lacks Text/Start/End, skipping row", line_number + 1);
            dropped += 1;
            continue;
        };

        let Some((metadata, text)) = split_at_text_field(body, positions.text) else {
            debug!("Line {}: text field not found, skipping row", line_number + 1);
            dropped += 1;
            continue;
        };

        let values: Vec<&str> = metadata.split(',').collect();
        let start_time = metadata_field(&values, positions.start);
        let end_time = metadata_field(&values, positions.end);

        let (target_text, reference_text) = classify_text(text);
        if target_text.is_empty() {
            debug!("Line {}: no target-language text, skipping row", line_number + 1);
            dropped += 1;
            continue;
        }

        lines.push(SubtitleLine::new(
            lines.len(),
            start_time,
            end_time,
            target_text,
            reference_text,
        ));
    }

    info!("Parsed {} subtitle lines ({} rows skipped)", lines.len(), dropped);
    lines
}

/// Parsed script with its source path
#[derive(Debug, Clone)]
pub struct SubtitleScript {
    /// Source filename
    pub source_file: PathBuf,

    /// Ordered learnable lines
    pub lines: Vec<SubtitleLine>,
}

impl SubtitleScript {
    /// Parse script content that came from `source_file`
    pub fn parse<P: AsRef<Path>>(source_file: P, content: &str) -> Self {
        SubtitleScript {
            source_file: source_file.as_ref().to_path_buf(),
            lines: parse_script(content),
        }
    }

    /// Read and parse a script file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        Ok(Self::parse(path, &content))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at a sequence position
    pub fn get(&self, index: usize) -> Option<&SubtitleLine> {
        self.lines.get(index)
    }
}

impl fmt::Display for SubtitleScript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Script")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Lines: {}", self.lines.len())?;
        Ok(())
    }
}
