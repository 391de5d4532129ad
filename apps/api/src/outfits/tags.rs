//! Tag extraction: turns a free-text outfit prompt into stylistic tags.

use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::{call_json, LlmError, TextGenerator};
use crate::outfits::prompts::TAG_EXTRACTION_SYSTEM;

#[derive(Debug, Deserialize)]
struct TagResponse {
    tags: Option<Vec<String>>,
}

/// Asks the text-generation service for tags describing `prompt`.
///
/// Tags are trimmed and blank tags dropped. An absent `tags` field, malformed JSON,
/// or an empty list all fail with `AppError::Generation`.
pub async fn extract_tags(prompt: &str, llm: &dyn TextGenerator) -> Result<Vec<String>, AppError> {
    let response: TagResponse = call_json(llm, TAG_EXTRACTION_SYSTEM, prompt)
        .await
        .map_err(|e| AppError::Generation(format!("Tag extraction failed: {e}")))?;

    let tags: Vec<String> = response
        .tags
        .ok_or(LlmError::MissingField("tags"))
        .map_err(|e| AppError::Generation(format!("Tag extraction failed: {e}")))?
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if tags.is_empty() {
        return Err(AppError::Generation(
            "Tag extraction failed: no tags found".to_string(),
        ));
    }

    Ok(tags)
}
