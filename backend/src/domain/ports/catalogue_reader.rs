//! Driven port for the read-only catalogue listings.

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::catalogue::{Destination, Promotion, TravelPackage, TravelStats};

/// Failures surfaced by catalogue persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CataloguePersistenceError {
    /// The store could not be reached or a connection could not be checked
    /// out of the pool.
    Connection { message: String },
    /// A query failed.
    Query { message: String },
}

impl CataloguePersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl fmt::Display for CataloguePersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection { message } => {
                write!(f, "failed to reach the catalogue store: {message}")
            }
            Self::Query { message } => write!(f, "catalogue query failed: {message}"),
        }
    }
}

impl std::error::Error for CataloguePersistenceError {}

/// Read-only catalogue queries backing the landing page sections.
///
/// All operations are side-effect-free and return records ordered by id
/// ascending, with placeholder values already substituted for missing
/// optional columns.
#[async_trait]
pub trait CatalogueReader: Send + Sync {
    /// Every destination, for the popular-destinations section.
    async fn list_destinations(&self) -> Result<Vec<Destination>, CataloguePersistenceError>;

    /// Every travel package, for the popular-packages section.
    async fn list_packages(&self) -> Result<Vec<TravelPackage>, CataloguePersistenceError>;

    /// Promotions whose window contains `reference_date`, both bounds
    /// inclusive.
    async fn list_active_promotions(
        &self,
        reference_date: NaiveDate,
    ) -> Result<Vec<Promotion>, CataloguePersistenceError>;

    /// The statistics singleton, or `None` when the table is unseeded.
    async fn stats(&self) -> Result<Option<TravelStats>, CataloguePersistenceError>;
}
