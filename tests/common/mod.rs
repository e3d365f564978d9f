/*!
 * Common test utilities for the cineglot test suite
 */

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Bilingual script with a two-line sentence, a one-line question,
/// a style row and a line with no Latin text
pub const SAMPLE_SCRIPT: &str = "\u{FEFF}[Script Info]
Title: Sample
ScriptType: v4.00+

[V4+ Styles]
Format: Name, Fontname, Fontsize
Style: Default,Arial,20

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:03.50,Default,,0,0,0,,我们从未放弃\\NWe never gave up
Dialogue: 0,0:00:03.60,0:00:05.00,Default,,0,0,0,,直到最后\\Nuntil the very end.
Dialogue: 0,0:00:06.00,0:00:07.20,Default,,0,0,0,,{\\an8}你去哪儿了？\\NWhere were you going?
Dialogue: 0,0:00:08.00,0:00:09.00,Default,,0,0,0,,第三章
Comment: 0,0:00:09.00,0:00:10.00,Default,,0,0,0,,Not dialogue
Dialogue: 0,0:00:10.00,0:00:12.00,Default,,0,0,0,,Running, she smiled.
";

/// Routes library log output through the test harness; safe to call repeatedly
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates the sample bilingual script in the specified directory
pub fn create_test_script(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SCRIPT)
}

/// Creates a known-word list in the specified directory
pub fn create_test_vocab(dir: &Path, filename: &str, words: &[&str]) -> Result<PathBuf> {
    create_test_file(dir, filename, &words.join("\n"))
}
