/*!
 * Study-guide request and response shapes.
 *
 * The generative service that turns a word list into definitions and
 * examples lives outside this crate. This module only builds the request
 * payload from captured vocabulary and decodes the `{word, definition,
 * example}` triples that come back.
 */

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::vocab::VocabItem;

/// Prompt template for the study guide.
///
/// Placeholders: `{target_language}`, `{words}`.
pub const STUDY_GUIDE_TEMPLATE: &str = r#"I am learning {target_language} from a movie.
Here is a list of words I didn't understand: {words}.

For each word, provide:
1. A concise definition suitable for a learner.
2. A simple example sentence (different from the movie context).

Output as a JSON array."#;

/// One entry of a generated study guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGuideEntry {
    pub word: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: String,
}

/// Payload handed to the generative service
#[derive(Debug, Clone, Serialize)]
pub struct StudyGuideRequest {
    /// Rendered prompt text
    pub prompt: String,

    /// MIME type the response must use
    pub response_mime_type: String,

    /// JSON schema of the expected response
    pub response_schema: Value,
}

impl StudyGuideRequest {
    /// Build a request for every captured word, in capture order.
    ///
    /// Returns `None` when there is nothing to ask about.
    pub fn from_vocab(items: &[VocabItem], target_language: &str) -> Option<Self> {
        if items.is_empty() {
            return None;
        }

        let words = items
            .iter()
            .map(|item| item.word.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let prompt = STUDY_GUIDE_TEMPLATE
            .replace("{target_language}", target_language)
            .replace("{words}", &words);

        Some(Self {
            prompt,
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        })
    }
}

/// Schema of the expected response: an array of `{word, definition, example}`
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "word": { "type": "STRING" },
                "definition": { "type": "STRING" },
                "example": { "type": "STRING" }
            }
        }
    })
}

/// Extract the JSON array from a possibly fenced response
fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    if trimmed.starts_with('[') {
        return trimmed;
    }

    // Markdown code fence, with or without a language tag
    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        let after = after.strip_prefix("json").unwrap_or(after);
        if let Some(end) = after.find("```") {
            return after[..end].trim();
        }
    }

    // First [ to last ]
    if let (Some(start), Some(end)) = (trimmed.find('['), trimmed.rfind(']')) {
        if end > start {
            return &trimmed[start..=end];
        }
    }

    trimmed
}

/// Decode a study-guide response; malformed input yields an empty guide
pub fn parse_response(response: &str) -> Vec<StudyGuideEntry> {
    if response.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(extract_json(response)) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to parse study guide response: {}", e);
            Vec::new()
        }
    }
}
