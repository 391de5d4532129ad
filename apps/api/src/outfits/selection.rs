//! Category selection: picks one top, bottom and shoes plus up to three misc pieces
//! from a ranked inventory.

use serde::Serialize;

use crate::errors::AppError;
use crate::models::clothing::{Classification, ClothingItemRow};
use crate::outfits::ranking::RankedItem;

/// Max accessories per outfit.
pub const MISC_LIMIT: usize = 3;

/// The pieces chosen for one outfit.
#[derive(Debug, Clone, Serialize)]
pub struct OutfitSelection {
    pub top: RankedItem,
    pub bottom: RankedItem,
    pub shoes: RankedItem,
    pub misc: Vec<RankedItem>,
}

impl OutfitSelection {
    /// All selected items in outfit order: top, bottom, shoes, then misc.
    pub fn items(&self) -> impl Iterator<Item = &ClothingItemRow> {
        [&self.top, &self.bottom, &self.shoes]
            .into_iter()
            .chain(self.misc.iter())
            .map(|r| &r.item)
    }
}

/// Walks `ranked` (already sorted descending) and takes the first item of each
/// required category and the first `MISC_LIMIT` misc items.
///
/// Fails with `AppError::IncompleteOutfit` naming every required category the
/// inventory lacks. No misc items is a valid outfit.
pub fn select_outfit(ranked: Vec<RankedItem>) -> Result<OutfitSelection, AppError> {
    let mut top = None;
    let mut bottom = None;
    let mut shoes = None;
    let mut misc = Vec::with_capacity(MISC_LIMIT);

    for candidate in ranked {
        match candidate.item.classification() {
            Some(Classification::Top) if top.is_none() => top = Some(candidate),
            Some(Classification::Bottom) if bottom.is_none() => bottom = Some(candidate),
            Some(Classification::Shoes) if shoes.is_none() => shoes = Some(candidate),
            Some(Classification::Misc) if misc.len() < MISC_LIMIT => misc.push(candidate),
            _ => {}
        }
    }

    match (top, bottom, shoes) {
        (Some(top), Some(bottom), Some(shoes)) => Ok(OutfitSelection {
            top,
            bottom,
            shoes,
            misc,
        }),
        (top, bottom, shoes) => {
            let missing: Vec<&str> = [
                (top.is_none(), Classification::Top),
                (bottom.is_none(), Classification::Bottom),
                (shoes.is_none(), Classification::Shoes),
            ]
            .into_iter()
            .filter(|(absent, _)| *absent)
            .map(|(_, c)| c.as_str())
            .collect();

            Err(AppError::IncompleteOutfit(format!(
                "Your wardrobe has no {} items. Add them before generating an outfit.",
                missing.join(", ")
            )))
        }
    }
}
