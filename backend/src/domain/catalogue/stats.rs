//! Travel statistics singleton read model.

use serde::{Deserialize, Serialize};

/// Storage-shaped input for [`TravelStats::new`], with optional columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDraft {
    pub destinations: Option<i32>,
    pub tours: Option<i32>,
    pub cruises: Option<i32>,
    pub hotels: Option<i32>,
}

/// Aggregate counters for the statistics section. Missing counters render
/// as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelStats {
    pub destinations: i32,
    pub tours: i32,
    pub cruises: i32,
    pub hotels: i32,
}

impl TravelStats {
    /// Build display-ready statistics, defaulting missing counters to zero.
    pub fn new(draft: StatsDraft) -> Self {
        Self {
            destinations: draft.destinations.unwrap_or_default(),
            tours: draft.tours.unwrap_or_default(),
            cruises: draft.cruises.unwrap_or_default(),
            hotels: draft.hotels.unwrap_or_default(),
        }
    }
}
