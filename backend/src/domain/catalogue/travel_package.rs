//! Travel package read-model entity.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a package row has no title.
pub const DEFAULT_TITLE: &str = "No Title";
/// Placeholder price shown when a package row has no price.
pub const DEFAULT_PRICE: i32 = 0;
/// Placeholder image used when a package row has no image path.
pub const DEFAULT_IMAGE: &str = "images/default-package.jpg";

/// Storage-shaped input for [`TravelPackage::new`], with optional columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPackageDraft {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Whole currency units; the page renders it as `$<price>`.
    pub price: Option<i32>,
    pub image: Option<String>,
}

/// Travel package card for the popular-packages section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: i32,
    pub image: String,
}

impl TravelPackage {
    /// Build a display-ready package, substituting placeholders for missing
    /// optional columns.
    pub fn new(draft: TravelPackageDraft) -> Self {
        Self {
            id: draft.id,
            title: draft.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            description: draft.description.unwrap_or_default(),
            price: draft.price.unwrap_or(DEFAULT_PRICE),
            image: draft.image.unwrap_or_else(|| DEFAULT_IMAGE.to_owned()),
        }
    }
}
