/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use cineglot::app_config::Config;
use cineglot::app_controller::Controller;
use cineglot::errors::{AppError, ConfigError, ScriptError, VocabularyError};

#[test]
fn test_scriptError_noDialogue_shouldDisplayPath() {
    let error = ScriptError::NoDialogue(PathBuf::from("movie.ass"));
    let display = format!("{}", error);
    assert!(display.contains("No target-language dialogue"));
    assert!(display.contains("movie.ass"));
}

#[test]
fn test_vocabularyError_empty_shouldDisplayPath() {
    let error = VocabularyError::Empty(PathBuf::from("known.txt"));
    assert!(error.to_string().contains("known.txt"));
}

#[test]
fn test_configError_invalidDepth_shouldDisplayValue() {
    let error = ConfigError::InvalidDepth(99);
    assert!(error.to_string().contains("99"));
}

#[test]
fn test_appError_fromDomainErrors_shouldWrapThem() {
    let app_error: AppError = ScriptError::Unreadable(PathBuf::from("x.ass")).into();
    assert!(matches!(app_error, AppError::Script(_)));
    assert!(app_error.to_string().starts_with("Script error:"));

    let app_error: AppError = ConfigError::SameLanguage("en".to_string()).into();
    assert!(matches!(app_error, AppError::Config(_)));
}

#[test]
fn test_appError_fromIoAndAnyhow_shouldConvert() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));

    let app_error: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(app_error, AppError::Unknown(ref msg) if msg == "boom"));
}

#[test]
fn test_appError_fromControllerError_shouldKeepTypedSource() {
    let controller = Controller::with_config(Config::default()).unwrap();
    let error = controller.load_script("missing/movie.ass").unwrap_err();
    let app_error = AppError::from(error);
    assert!(matches!(app_error, AppError::Script(ScriptError::Unreadable(_))));

    let mut config = Config::default();
    config.learning.max_context_depth = 0;
    let error = Controller::with_config(config).err().unwrap();
    assert!(matches!(AppError::from(error), AppError::Config(ConfigError::InvalidDepth(0))));
}
