use crate::errors::AppError;
use crate::llm_client::Embedder;

/// Joins tags into the single comma-separated string that gets embedded.
pub fn tag_input(tags: &[String]) -> String {
    tags.join(", ")
}

/// Embeds the tag list. An empty vector is an `AppError::Embedding`.
pub async fn embed_tags(tags: &[String], embedder: &dyn Embedder) -> Result<Vec<f32>, AppError> {
    let vector = embedder
        .embed(&tag_input(tags))
        .await
        .map_err(|e| AppError::Embedding(format!("Tag embedding failed: {e}")))?;

    if vector.is_empty() {
        return Err(AppError::Embedding(
            "Tag embedding failed: empty vector".to_string(),
        ));
    }

    Ok(vector)
}
