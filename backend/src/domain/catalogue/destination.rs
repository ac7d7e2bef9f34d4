//! Destination read-model entity.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a destination row has no name.
pub const DEFAULT_NAME: &str = "Unnamed";
/// Placeholder shown when a destination row has no region.
pub const DEFAULT_REGION: &str = "Unknown";
/// Placeholder image used when a destination row has no image path.
pub const DEFAULT_IMAGE: &str = "images/default-destination.jpg";

/// Storage-shaped input for [`Destination::new`], with optional columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationDraft {
    pub id: i32,
    pub name: Option<String>,
    pub region: Option<String>,
    pub image: Option<String>,
}

/// Destination card for the popular-destinations section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub region: String,
    pub image: String,
}

impl Destination {
    /// Build a display-ready destination, substituting placeholders for
    /// missing optional columns.
    pub fn new(draft: DestinationDraft) -> Self {
        Self {
            id: draft.id,
            name: draft.name.unwrap_or_else(|| DEFAULT_NAME.to_owned()),
            region: draft.region.unwrap_or_else(|| DEFAULT_REGION.to_owned()),
            image: draft.image.unwrap_or_else(|| DEFAULT_IMAGE.to_owned()),
        }
    }
}
