//! Axum route handlers for the Outfit API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::clothing::ClothingItemRow;
use crate::models::outfit::{OutfitFeedbackRow, OutfitRow};
use crate::outfits::feedback::{add_feedback, get_feedback, AddFeedbackRequest};
use crate::outfits::generator::{
    generate_outfit, get_outfit_detail, regenerate_outfit, GenerateRequest, GenerateResponse,
    OutfitDetail, RegenerateRequest,
};
use crate::state::AppState;

/// GET /api/v1/clothing
pub async fn handle_list_clothing(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ClothingItemRow>>, AppError> {
    Ok(Json(state.store.list_clothing_items(user_id).await?))
}

/// POST /api/v1/outfits
///
/// Full pipeline: tags → embedding → rank → select → describe → persist.
pub async fn handle_generate(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(request): AppJson<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), AppError> {
    let response = generate_outfit(
        state.llm.as_ref(),
        state.embedder.as_ref(),
        state.store.as_ref(),
        user_id,
        &request.prompt,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/outfits
pub async fn handle_list_outfits(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<OutfitRow>>, AppError> {
    Ok(Json(state.store.list_outfits(user_id).await?))
}

/// GET /api/v1/outfits/:id
pub async fn handle_get_outfit(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(outfit_id): Path<Uuid>,
) -> Result<Json<OutfitDetail>, AppError> {
    let detail = get_outfit_detail(state.store.as_ref(), user_id, outfit_id).await?;
    Ok(Json(detail))
}

/// POST /api/v1/outfits/:id/regenerate
///
/// Generates a new outfit from the stored prompt plus feedback. The original is untouched.
pub async fn handle_regenerate(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(outfit_id): Path<Uuid>,
    AppJson(request): AppJson<RegenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), AppError> {
    let response = regenerate_outfit(
        state.llm.as_ref(),
        state.embedder.as_ref(),
        state.store.as_ref(),
        user_id,
        outfit_id,
        &request.feedback,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/outfits/:id/feedback
pub async fn handle_add_feedback(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(outfit_id): Path<Uuid>,
    AppJson(request): AppJson<AddFeedbackRequest>,
) -> Result<(StatusCode, Json<OutfitFeedbackRow>), AppError> {
    let feedback = add_feedback(state.store.as_ref(), user_id, outfit_id, request).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /api/v1/outfits/:id/feedback
pub async fn handle_get_feedback(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(outfit_id): Path<Uuid>,
) -> Result<Json<Vec<OutfitFeedbackRow>>, AppError> {
    Ok(Json(
        get_feedback(state.store.as_ref(), user_id, outfit_id).await?,
    ))
}
