use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

// Language utilities
//
// Script classification used to split bilingual subtitle segments, plus
// ISO 639 code handling for the configured target and reference languages.

// @const: Inline formatting tag such as {\an8} or {\c&HFFFFFF&}
static FORMATTING_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{[^}]+\}").unwrap()
});

// @const: Run of at least two Latin letters
static LATIN_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z]{2,}").unwrap()
});

/// Whether text contains a CJK Unified Ideograph (U+4E00..=U+9FFF)
pub fn has_chinese(text: &str) -> bool {
    text.chars().any(|c| ('\u{4E00}'..='\u{9FFF}').contains(&c))
}

/// Whether text carries target-language content (two or more Latin letters in a row)
pub fn has_target_language(text: &str) -> bool {
    LATIN_RUN_REGEX.is_match(text)
}

/// Remove curly-brace formatting tags
pub fn strip_tags(text: &str) -> String {
    FORMATTING_TAG_REGEX.replace_all(text, "").into_owned()
}

/// Language code type
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T or 639-3 (3-letter) code
    Part3,
}

/// Validate if a language code is a valid ISO 639-1 or 3-letter code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    match normalized_code.len() {
        2 if Language::from_639_1(&normalized_code).is_some() => Ok(LanguageCodeType::Part1),
        3 if Language::from_639_3(&normalized_code).is_some() => Ok(LanguageCodeType::Part3),
        _ => Err(anyhow!("Invalid language code: {}", code)),
    }
}

/// Resolve a code to its isolang language
fn resolve(code: &str) -> Result<Language> {
    let normalized_code = code.trim().to_lowercase();
    let language = match validate_language_code(&normalized_code)? {
        LanguageCodeType::Part1 => Language::from_639_1(&normalized_code),
        LanguageCodeType::Part3 => Language::from_639_3(&normalized_code),
    };
    language.ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Check if two language codes represent the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (resolve(code1), resolve(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    Ok(resolve(code)?.to_name().to_string())
}
