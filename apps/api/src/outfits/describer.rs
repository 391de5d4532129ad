//! Outfit describer: asks the text-generation service to name and describe a selection.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{call_json, LlmError, TextGenerator};
use crate::outfits::prompts::{DESCRIPTION_PROMPT_TEMPLATE, DESCRIPTION_SYSTEM};
use crate::outfits::selection::OutfitSelection;

#[derive(Debug, Deserialize)]
struct DescriptionResponse {
    name: Option<String>,
    description: Option<String>,
}

/// Validated name and description for a generated outfit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitDescription {
    pub name: String,
    pub description: String,
}

/// Generates a display name and description for `selection`.
pub async fn describe_outfit(
    prompt: &str,
    selection: &OutfitSelection,
    llm: &dyn TextGenerator,
) -> Result<OutfitDescription, AppError> {
    let request = build_description_prompt(prompt, selection);

    let response: DescriptionResponse = call_json(llm, DESCRIPTION_SYSTEM, &request)
        .await
        .map_err(|e| AppError::Generation(format!("Outfit description failed: {e}")))?;

    parse_description(response)
        .map_err(|e| AppError::Generation(format!("Outfit description failed: {e}")))
}

/// Fills the description template. Pieces are the non-blank descriptions of the
/// selected items in outfit order.
fn build_description_prompt(prompt: &str, selection: &OutfitSelection) -> String {
    let pieces = selection
        .items()
        .filter_map(|item| item.description_text())
        .collect::<Vec<_>>()
        .join(", ");

    DESCRIPTION_PROMPT_TEMPLATE
        .replace("{prompt}", prompt)
        .replace("{pieces}", &pieces)
}

fn parse_description(response: DescriptionResponse) -> Result<OutfitDescription, LlmError> {
    Ok(OutfitDescription {
        name: require_text(response.name, "name")?,
        description: require_text(response.description, "description")?,
    })
}

fn require_text(value: Option<String>, field: &'static str) -> Result<String, LlmError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(LlmError::MissingField(field))
}
