//! Promotion read-model entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder discount shown when a promotion row has no discount.
pub const DEFAULT_DISCOUNT: i32 = 0;

/// Storage-shaped input for [`Promotion::new`], with optional columns.
///
/// The date window is mandatory: a promotion without bounds cannot take part
/// in the active-window query, so storage declares both columns `NOT NULL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionDraft {
    pub id: i32,
    pub description: Option<String>,
    /// Percentage off, rendered as `<discount>%`.
    pub discount: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Promotion entry for the current-promotions section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i32,
    pub description: String,
    pub discount: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Promotion {
    /// Build a display-ready promotion, substituting placeholders for missing
    /// optional columns.
    pub fn new(draft: PromotionDraft) -> Self {
        Self {
            id: draft.id,
            description: draft.description.unwrap_or_default(),
            discount: draft.discount.unwrap_or(DEFAULT_DISCOUNT),
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }

    /// Whether the promotion runs on `reference_date`.
    ///
    /// Both window bounds are inclusive: a promotion starting or ending on
    /// the reference date is active.
    pub fn is_active(&self, reference_date: NaiveDate) -> bool {
        self.start_date <= reference_date && reference_date <= self.end_date
    }
}
