use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A generated outfit. Created once per generation call and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OutfitRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub top_id: Uuid,
    pub bottom_id: Uuid,
    pub shoes_id: Uuid,
    pub misc_ids: Vec<Uuid>,
    pub prompt: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only feedback on an outfit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OutfitFeedbackRow {
    pub id: Uuid,
    pub outfit_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `outfits`. The store assigns `created_at`.
#[derive(Debug, Clone)]
pub struct NewOutfit {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub top_id: Uuid,
    pub bottom_id: Uuid,
    pub shoes_id: Uuid,
    pub misc_ids: Vec<Uuid>,
    pub prompt: String,
}

/// Insert payload for `outfit_feedback`. `rating` is already validated to 1..=5.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub id: Uuid,
    pub outfit_id: Uuid,
    pub user_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
}
