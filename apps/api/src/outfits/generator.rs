//! Outfit Generation: orchestrates the full pipeline.
//!
//! Flow: extract_tags → embed_tags → list_clothing_items → rank_items →
//!       select_outfit → describe_outfit → insert_outfit → return response.
//!
//! Strictly sequential. Nothing is written until the final insert, so a failure at
//! any earlier stage leaves no record behind; the request is logged and abandoned.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{Embedder, TextGenerator};
use crate::models::clothing::ClothingItemRow;
use crate::models::outfit::{NewOutfit, OutfitRow};
use crate::outfits::describer::describe_outfit;
use crate::outfits::embedding::embed_tags;
use crate::outfits::prompts::FEEDBACK_PROMPT_TEMPLATE;
use crate::outfits::ranking::rank_items;
use crate::outfits::selection::select_outfit;
use crate::outfits::tags::extract_tags;
use crate::store::WardrobeStore;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for outfit generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Request body for regenerating an outfit from feedback.
#[derive(Debug, Clone, Deserialize)]
pub struct RegenerateRequest {
    pub feedback: String,
}

/// A stored outfit with its item references resolved.
#[derive(Debug, Clone, Serialize)]
pub struct OutfitDetail {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub prompt: String,
    pub top: ClothingItemRow,
    pub bottom: ClothingItemRow,
    pub shoes: ClothingItemRow,
    pub misc: Vec<ClothingItemRow>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Response from the generation pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub outfit: OutfitDetail,
    pub tags: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full outfit generation pipeline for `user_id` and persists the result.
///
/// Steps:
/// 1. extract_tags() → Vec<String>
/// 2. embed_tags() → prompt vector
/// 3. list_clothing_items() → point-in-time inventory snapshot
/// 4. rank_items() → items sorted by cosine similarity
/// 5. select_outfit() → top / bottom / shoes / up to 3 misc
/// 6. describe_outfit() → name + description
/// 7. insert_outfit() → OutfitRow
pub async fn generate_outfit(
    llm: &dyn TextGenerator,
    embedder: &dyn Embedder,
    store: &dyn WardrobeStore,
    user_id: Uuid,
    prompt: &str,
) -> Result<GenerateResponse, AppError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    // Step 1: Tags
    info!("Extracting tags for user {user_id}");
    let tags = extract_tags(prompt, llm)
        .await
        .map_err(abandoned("tag extraction", user_id))?;
    info!("Extracted {} tags: {}", tags.len(), tags.join(", "));

    // Step 2: Embedding
    let query = embed_tags(&tags, embedder)
        .await
        .map_err(abandoned("embedding", user_id))?;

    // Step 3: Inventory snapshot
    let items = store
        .list_clothing_items(user_id)
        .await
        .map_err(abandoned("inventory read", user_id))?;
    info!("Ranking {} clothing items for user {user_id}", items.len());

    // Steps 4-5: Rank and select
    let selection =
        select_outfit(rank_items(items, &query)).map_err(abandoned("selection", user_id))?;

    // Step 6: Name and description
    let description = describe_outfit(prompt, &selection, llm)
        .await
        .map_err(abandoned("description", user_id))?;

    // Step 7: Persist
    let outfit = store
        .insert_outfit(NewOutfit {
            id: Uuid::new_v4(),
            user_id,
            name: description.name,
            description: description.description,
            top_id: selection.top.item.id,
            bottom_id: selection.bottom.item.id,
            shoes_id: selection.shoes.item.id,
            misc_ids: selection.misc.iter().map(|m| m.item.id).collect(),
            prompt: prompt.to_string(),
        })
        .await
        .map_err(abandoned("persistence", user_id))?;

    info!(
        "Generated outfit {} ('{}') with {} misc items for user {user_id}",
        outfit.id,
        outfit.name,
        outfit.misc_ids.len()
    );

    let detail = OutfitDetail {
        id: outfit.id,
        name: outfit.name,
        description: outfit.description,
        prompt: outfit.prompt,
        top: selection.top.item,
        bottom: selection.bottom.item,
        shoes: selection.shoes.item,
        misc: selection.misc.into_iter().map(|m| m.item).collect(),
        created_at: outfit.created_at,
    };

    Ok(GenerateResponse {
        outfit: detail,
        tags,
    })
}

/// Builds the regeneration prompt from an outfit's original prompt and user feedback.
pub fn build_feedback_prompt(original_prompt: &str, feedback: &str) -> String {
    FEEDBACK_PROMPT_TEMPLATE
        .replace("{prompt}", original_prompt)
        .replace("{feedback}", feedback)
}

/// Produces a new outfit from a stored outfit's prompt plus free-text feedback.
/// The original outfit is left untouched.
pub async fn regenerate_outfit(
    llm: &dyn TextGenerator,
    embedder: &dyn Embedder,
    store: &dyn WardrobeStore,
    user_id: Uuid,
    outfit_id: Uuid,
    feedback: &str,
) -> Result<GenerateResponse, AppError> {
    let feedback = feedback.trim();
    if feedback.is_empty() {
        return Err(AppError::Validation("feedback cannot be empty".to_string()));
    }

    let original = store
        .get_outfit(outfit_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Outfit {outfit_id} not found")))?;

    info!("Regenerating outfit {outfit_id} from feedback for user {user_id}");
    let prompt = build_feedback_prompt(&original.prompt, feedback);

    generate_outfit(llm, embedder, store, user_id, &prompt).await
}

// ────────────────────────────────────────────────────────────────────────────
// Retrieval
// ────────────────────────────────────────────────────────────────────────────

/// Loads one of the caller's outfits with its items resolved.
pub async fn get_outfit_detail(
    store: &dyn WardrobeStore,
    user_id: Uuid,
    outfit_id: Uuid,
) -> Result<OutfitDetail, AppError> {
    let outfit = store
        .get_outfit(outfit_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Outfit {outfit_id} not found")))?;

    let items = store.list_clothing_items(user_id).await?;
    resolve_outfit(outfit, items)
}

/// Joins an outfit row with the inventory it references.
fn resolve_outfit(
    outfit: OutfitRow,
    items: Vec<ClothingItemRow>,
) -> Result<OutfitDetail, AppError> {
    let mut by_id: HashMap<Uuid, ClothingItemRow> =
        items.into_iter().map(|item| (item.id, item)).collect();

    let outfit_id = outfit.id;
    let mut take = |id: Uuid| {
        by_id.remove(&id).ok_or_else(|| {
            AppError::NotFound(format!(
                "Clothing item {id} referenced by outfit {outfit_id} no longer exists"
            ))
        })
    };

    let top = take(outfit.top_id)?;
    let bottom = take(outfit.bottom_id)?;
    let shoes = take(outfit.shoes_id)?;
    let misc = outfit
        .misc_ids
        .iter()
        .map(|&id| take(id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OutfitDetail {
        id: outfit.id,
        name: outfit.name,
        description: outfit.description,
        prompt: outfit.prompt,
        top,
        bottom,
        shoes,
        misc,
        created_at: outfit.created_at,
    })
}

/// Logs the pipeline stage a generation died at. Earlier external calls are not
/// retried or compensated; there is nothing persisted to undo.
fn abandoned(stage: &'static str, user_id: Uuid) -> impl FnOnce(AppError) -> AppError {
    move |e| {
        warn!("Outfit generation for user {user_id} abandoned at {stage}: {e}");
        e
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
