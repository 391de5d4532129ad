//! In-memory `WardrobeStore` for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{newest_first, WardrobeStore};
use crate::errors::AppError;
use crate::models::clothing::{Classification, ClothingItemRow};
use crate::models::outfit::{NewFeedback, NewOutfit, OutfitFeedbackRow, OutfitRow};

#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<Vec<ClothingItemRow>>,
    outfits: Mutex<Vec<OutfitRow>>,
    feedback: Mutex<Vec<OutfitFeedbackRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item for `user_id` and returns its id.
    pub fn add_item(
        &self,
        user_id: Uuid,
        name: &str,
        classification: Classification,
        tags_vector: Vec<f32>,
    ) -> Uuid {
        let item = ClothingItemRow {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            description: Some(format!("{name} description")),
            image: format!("https://cdn.example.com/{name}.png"),
            classification: classification.as_str().to_string(),
            tags_vector,
            created_at: Utc::now(),
        };
        let id = item.id;
        self.items.lock().unwrap().push(item);
        id
    }

    pub fn outfit_count(&self) -> usize {
        self.outfits.lock().unwrap().len()
    }
}

#[async_trait]
impl WardrobeStore for MemoryStore {
    async fn list_clothing_items(&self, user_id: Uuid) -> Result<Vec<ClothingItemRow>, AppError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_outfit(&self, outfit: NewOutfit) -> Result<OutfitRow, AppError> {
        let row = OutfitRow {
            id: outfit.id,
            user_id: outfit.user_id,
            name: outfit.name,
            description: outfit.description,
            top_id: outfit.top_id,
            bottom_id: outfit.bottom_id,
            shoes_id: outfit.shoes_id,
            misc_ids: outfit.misc_ids,
            prompt: outfit.prompt,
            created_at: Utc::now(),
        };
        self.outfits.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn get_outfit(
        &self,
        outfit_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<OutfitRow>, AppError> {
        Ok(self
            .outfits
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == outfit_id && o.user_id == user_id)
            .cloned())
    }

    async fn list_outfits(&self, user_id: Uuid) -> Result<Vec<OutfitRow>, AppError> {
        let mut outfits: Vec<OutfitRow> = self
            .outfits
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        outfits.sort_by(|a, b| newest_first((&a.created_at, &a.id), (&b.created_at, &b.id)));
        Ok(outfits)
    }

    async fn insert_feedback(
        &self,
        feedback: NewFeedback,
    ) -> Result<OutfitFeedbackRow, AppError> {
        let row = OutfitFeedbackRow {
            id: feedback.id,
            outfit_id: feedback.outfit_id,
            user_id: feedback.user_id,
            rating: feedback.rating,
            comment: feedback.comment,
            created_at: Utc::now(),
        };
        self.feedback.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_feedback(&self, outfit_id: Uuid) -> Result<Vec<OutfitFeedbackRow>, AppError> {
        let mut feedback: Vec<OutfitFeedbackRow> = self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.outfit_id == outfit_id)
            .cloned()
            .collect();
        feedback.sort_by(|a, b| newest_first((&a.created_at, &a.id), (&b.created_at, &b.id)));
        Ok(feedback)
    }
}
