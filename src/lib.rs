/*!
 * # cineglot - learn a language from bilingual movie subtitles
 *
 * A Rust library for studying vocabulary from dual-language `.ass` scripts.
 *
 * ## Features
 *
 * - Parse bilingual Advanced SubStation Alpha scripts into clean line pairs
 * - Separate target-language text from its reference translation
 * - Decide whether a token is already known, tolerating inflections
 *   (plurals, tenses, progressive forms, adverbs, comparatives, contractions)
 * - Expand a single subtitle line into the full sentence it belongs to
 * - Capture vocabulary with context and prepare study-guide requests
 * - ISO 639-1 and ISO 639-3 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `text`: Word handling:
 *   - `text::normalizer`: Token canonicalization
 *   - `text::morphology`: Known-word matching with inflection rules
 * - `subtitle_processor`: Bilingual script parsing
 * - `context`: Sentence reconstruction:
 *   - `context::expander`: Automatic sentence boundaries
 *   - `context::window`: Manually adjustable sentence window
 * - `vocab`: Vocabulary capture and grouping
 * - `study_guide`: Study-guide request and response shapes
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: Script detection and ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod context;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod study_guide;
pub mod subtitle_processor;
pub mod text;
pub mod vocab;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use context::{ExpandedContext, SentenceWindow, expand};
pub use subtitle_processor::{SubtitleLine, SubtitleScript, parse_script};
pub use text::{KnownWordSet, is_known, normalize};
pub use language_utils::{has_chinese, language_codes_match, get_language_name};
pub use errors::{AppError, ConfigError, ScriptError, VocabularyError};
