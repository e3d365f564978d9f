/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use cineglot::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));
    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that script discovery is recursive, sorted and extension-insensitive
#[test]
fn test_find_scripts_withNestedFolders_shouldFindAssAndSsa() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "b.ass", "")?;
    common::create_test_file(root, "season1/a.SSA", "")?;
    common::create_test_file(root, "notes.txt", "")?;
    common::create_test_file(root, "movie.srt", "")?;

    let scripts = FileManager::find_scripts(root)?;

    assert_eq!(scripts.len(), 2);
    assert!(scripts.iter().all(FileManager::is_script_file));
    assert!(scripts.windows(2).all(|w| w[0] <= w[1]));
    Ok(())
}

/// Test extension matching
#[test]
fn test_has_extension_withDifferentCase_shouldMatch() {
    assert!(FileManager::has_extension("movie.ASS", "ass"));
    assert!(!FileManager::has_extension("movie.ass.bak", "ass"));
    assert!(!FileManager::is_script_file("README"));
}

/// Test that reading drops a byte-order mark
#[test]
fn test_read_to_string_withBom_shouldStripIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "bom.txt", "\u{FEFF}hello")?;

    assert_eq!(FileManager::read_to_string(&path)?, "hello");
    Ok(())
}

/// Test that writing creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested/dir/out.txt");

    FileManager::write_to_file(&path, "content")?;

    assert_eq!(FileManager::read_to_string(&path)?, "content");
    Ok(())
}
