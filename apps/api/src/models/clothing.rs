use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fixed category label on a clothing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Top,
    Bottom,
    Shoes,
    Misc,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Top => "top",
            Classification::Bottom => "bottom",
            Classification::Shoes => "shoes",
            Classification::Misc => "misc",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Classification::Top),
            "bottom" => Ok(Classification::Bottom),
            "shoes" => Ok(Classification::Shoes),
            "misc" => Ok(Classification::Misc),
            other => Err(format!("unknown classification '{other}'")),
        }
    }
}

/// A catalogued clothing item. `tags_vector` is written once when the item is tagged.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClothingItemRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: String,
    pub classification: String,
    #[serde(skip_serializing)]
    pub tags_vector: Vec<f32>,
    pub created_at: DateTime<Utc>,
}

impl ClothingItemRow {
    /// Parsed classification. `None` for labels outside the fixed set.
    pub fn classification(&self) -> Option<Classification> {
        self.classification.parse().ok()
    }

    /// Description if present and not blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}
