//! Persistent store: the only shared resource touched by the outfit pipeline.
//!
//! `WardrobeStore` is carried in `AppState` as `Arc<dyn WardrobeStore>`.
//! Production uses `PgStore`; tests use `memory::MemoryStore`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::clothing::ClothingItemRow;
use crate::models::outfit::{NewFeedback, NewOutfit, OutfitFeedbackRow, OutfitRow};

#[cfg(test)]
pub mod memory;

#[async_trait]
pub trait WardrobeStore: Send + Sync {
    /// All clothing items owned by `user_id`, in insertion order.
    async fn list_clothing_items(&self, user_id: Uuid) -> Result<Vec<ClothingItemRow>, AppError>;

    async fn insert_outfit(&self, outfit: NewOutfit) -> Result<OutfitRow, AppError>;

    /// The outfit if it exists and is owned by `user_id`.
    async fn get_outfit(&self, outfit_id: Uuid, user_id: Uuid)
        -> Result<Option<OutfitRow>, AppError>;

    /// Outfits owned by `user_id`, most recent first.
    /// Rows sharing a `created_at` are ordered by descending `id`.
    async fn list_outfits(&self, user_id: Uuid) -> Result<Vec<OutfitRow>, AppError>;

    async fn insert_feedback(&self, feedback: NewFeedback)
        -> Result<OutfitFeedbackRow, AppError>;

    /// Feedback for an outfit, most recent first.
    /// Rows sharing a `created_at` are ordered by descending `id`.
    async fn list_feedback(&self, outfit_id: Uuid) -> Result<Vec<OutfitFeedbackRow>, AppError>;
}

/// Row order for history listings: `created_at` descending, then `id` descending so
/// rows sharing a timestamp still come back in a fixed order. Matches the
/// `ORDER BY created_at DESC, id DESC` used by `PgStore`.
#[cfg(test)]
pub(crate) fn newest_first(
    a: (&chrono::DateTime<chrono::Utc>, &Uuid),
    b: (&chrono::DateTime<chrono::Utc>, &Uuid),
) -> std::cmp::Ordering {
    b.0.cmp(a.0).then_with(|| b.1.cmp(a.1))
}

/// Postgres-backed store. Plain inserts and reads; no transaction spans pipeline steps.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WardrobeStore for PgStore {
    async fn list_clothing_items(&self, user_id: Uuid) -> Result<Vec<ClothingItemRow>, AppError> {
        Ok(sqlx::query_as::<_, ClothingItemRow>(
            r#"
            SELECT id, user_id, name, description, image, classification, tags_vector, created_at
            FROM clothing_items
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_outfit(&self, outfit: NewOutfit) -> Result<OutfitRow, AppError> {
        Ok(sqlx::query_as::<_, OutfitRow>(
            r#"
            INSERT INTO outfits
                (id, user_id, name, description, top_id, bottom_id, shoes_id, misc_ids, prompt)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(outfit.id)
        .bind(outfit.user_id)
        .bind(&outfit.name)
        .bind(&outfit.description)
        .bind(outfit.top_id)
        .bind(outfit.bottom_id)
        .bind(outfit.shoes_id)
        .bind(&outfit.misc_ids)
        .bind(&outfit.prompt)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn get_outfit(
        &self,
        outfit_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<OutfitRow>, AppError> {
        Ok(
            sqlx::query_as::<_, OutfitRow>("SELECT * FROM outfits WHERE id = $1 AND user_id = $2")
                .bind(outfit_id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_outfits(&self, user_id: Uuid) -> Result<Vec<OutfitRow>, AppError> {
        Ok(sqlx::query_as::<_, OutfitRow>(
            "SELECT * FROM outfits WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_feedback(
        &self,
        feedback: NewFeedback,
    ) -> Result<OutfitFeedbackRow, AppError> {
        Ok(sqlx::query_as::<_, OutfitFeedbackRow>(
            r#"
            INSERT INTO outfit_feedback (id, outfit_id, user_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(feedback.id)
        .bind(feedback.outfit_id)
        .bind(feedback.user_id)
        .bind(feedback.rating)
        .bind(&feedback.comment)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_feedback(&self, outfit_id: Uuid) -> Result<Vec<OutfitFeedbackRow>, AppError> {
        Ok(sqlx::query_as::<_, OutfitFeedbackRow>(
            "SELECT * FROM outfit_feedback WHERE outfit_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(outfit_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
