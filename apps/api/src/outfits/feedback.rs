//! Outfit feedback: append-only ratings and comments on a generated outfit.

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::outfit::{NewFeedback, OutfitFeedbackRow};
use crate::store::WardrobeStore;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Request body for adding feedback. `rating` is wide so out-of-range values reach
/// validation instead of failing JSON extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct AddFeedbackRequest {
    pub rating: i64,
    pub comment: Option<String>,
}

/// Checks `rating` is within 1..=5.
pub fn validate_rating(rating: i64) -> Result<i16, AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    i16::try_from(rating).map_err(|e| AppError::Internal(e.into()))
}

/// Records feedback on one of the caller's outfits.
pub async fn add_feedback(
    store: &dyn WardrobeStore,
    user_id: Uuid,
    outfit_id: Uuid,
    request: AddFeedbackRequest,
) -> Result<OutfitFeedbackRow, AppError> {
    let rating = validate_rating(request.rating)?;
    let comment = request
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    ensure_outfit_owned(store, user_id, outfit_id).await?;

    let feedback = store
        .insert_feedback(NewFeedback {
            id: Uuid::new_v4(),
            outfit_id,
            user_id,
            rating,
            comment,
        })
        .await?;

    info!("Recorded rating {rating} on outfit {outfit_id} from user {user_id}");
    Ok(feedback)
}

/// Feedback on one of the caller's outfits, most recent first.
pub async fn get_feedback(
    store: &dyn WardrobeStore,
    user_id: Uuid,
    outfit_id: Uuid,
) -> Result<Vec<OutfitFeedbackRow>, AppError> {
    ensure_outfit_owned(store, user_id, outfit_id).await?;
    store.list_feedback(outfit_id).await
}

async fn ensure_outfit_owned(
    store: &dyn WardrobeStore,
    user_id: Uuid,
    outfit_id: Uuid,
) -> Result<(), AppError> {
    match store.get_outfit(outfit_id, user_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!("Outfit {outfit_id} not found"))),
    }
}
