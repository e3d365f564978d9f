/*!
 * Error types for the cineglot application.
 *
 * The parsing, matching and expansion algorithms never fail; these types
 * cover the outer layer only (reading files, loading configuration),
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a subtitle script
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The script file could not be read
    #[error("Failed to read subtitle script: {}", .0.display())]
    Unreadable(PathBuf),

    /// The script parsed to zero learnable lines
    #[error("No target-language dialogue found in script: {}", .0.display())]
    NoDialogue(PathBuf),
}

/// Errors that can occur when loading a known-word vocabulary
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The vocabulary file could not be read
    #[error("Failed to read vocabulary file: {}", .0.display())]
    Unreadable(PathBuf),

    /// The vocabulary file has no usable words
    #[error("Vocabulary file contains no words: {}", .0.display())]
    Empty(PathBuf),
}

/// Errors raised by configuration validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Unknown ISO 639 language code
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    /// Target and reference language are the same
    #[error("Target and reference language must differ (both are '{0}')")]
    SameLanguage(String),

    /// Context depth outside the accepted range
    #[error("Context depth must be between 1 and 50, got {0}")]
    InvalidDepth(usize),
}

/// Single error type for library consumers.
///
/// The crate itself reports through `anyhow` with the typed errors above as
/// sources; callers that want one matchable enum convert into this with `?`
/// or `AppError::from`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error loading a script
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Error loading a vocabulary
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// Error in configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Recovers the typed source of a controller error, through any added context
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        let error = match error.downcast::<ScriptError>() {
            Ok(e) => return Self::Script(e),
            Err(error) => error,
        };
        let error = match error.downcast::<VocabularyError>() {
            Ok(e) => return Self::Vocabulary(e),
            Err(error) => error,
        };
        match error.downcast::<ConfigError>() {
            Ok(e) => Self::Config(e),
            Err(error) => Self::Unknown(error.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
