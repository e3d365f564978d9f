/*!
 * Integration tests for the application lifecycle
 */

use anyhow::Result;

use cineglot::app_config::Config;
use cineglot::app_controller::Controller;
use crate::common;

/// Test config creation, reload and controller start-up
#[test]
fn test_app_lifecycle_withFreshConfig_shouldStartController() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("cineglot.json");

    let config = Config::load_or_create(&config_path)?;
    assert!(config_path.exists());

    let controller = Controller::with_config(config)?;
    assert_eq!(controller.config().target_language, "en");
    assert!(controller.known_words().is_empty());
    Ok(())
}

/// Test scanning a folder of scripts, skipping ones without dialogue
#[test]
fn test_app_lifecycle_scanFolder_shouldSummarizeEachScript() -> Result<()> {
    common::init_test_logger();
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_script(root, "s01/e01.ass")?;
    common::create_test_script(root, "s01/e02.ssa")?;
    common::create_test_file(root, "s01/blank.ass", "[Script Info]\nTitle: Nothing\n")?;
    common::create_test_file(root, "notes.txt", "not a script")?;
    let vocab = common::create_test_vocab(root, "known.txt", &["we", "never", "give", "up"])?;

    let config = Config { known_words_path: Some(vocab), ..Config::default() };
    let controller = Controller::with_config(config)?;

    let summaries = controller.scan_folder(root)?;

    assert_eq!(summaries.len(), 2);
    for summary in &summaries {
        assert_eq!(summary.lines, 4);
        assert!(summary.unknown_words > 0);
    }
    assert!(summaries[0].path.ends_with("s01/e01.ass"));
    Ok(())
}
