//! In-memory port implementations.
//!
//! Used by tests and by database-less development runs (no `DATABASE_URL`).
//! The user repository enforces the same uniqueness semantics the PostgreSQL
//! constraints provide, so the registration flow behaves identically against
//! either backend.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::UserAccount;
use crate::domain::catalogue::{
    Destination, DestinationDraft, Promotion, PromotionDraft, StatsDraft, TravelPackage,
    TravelPackageDraft, TravelStats,
};
use crate::domain::ports::{
    CatalogueReader, CataloguePersistenceError, UserPersistenceError, UserRepository,
};

/// In-memory user store with unique usernames and emails.
#[derive(Default)]
pub struct InMemoryUserRepository {
    accounts: Mutex<Vec<UserAccount>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<UserAccount>> {
        match self.accounts.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut accounts = self.lock();
        if accounts
            .iter()
            .any(|existing| existing.username() == account.username())
        {
            return Err(UserPersistenceError::duplicate("username"));
        }
        if accounts
            .iter()
            .any(|existing| existing.email() == account.email())
        {
            return Err(UserPersistenceError::duplicate("email"));
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        Ok(self
            .lock()
            .iter()
            .find(|account| {
                account.username().as_ref() == identifier
                    || account.email().as_ref() == identifier
            })
            .cloned())
    }
}

/// In-memory catalogue with fixed records.
#[derive(Default, Clone)]
pub struct InMemoryCatalogue {
    destinations: Vec<Destination>,
    packages: Vec<TravelPackage>,
    promotions: Vec<Promotion>,
    stats: Option<TravelStats>,
}

impl InMemoryCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the destination records.
    pub fn with_destinations(mut self, destinations: Vec<Destination>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Replace the travel package records.
    pub fn with_packages(mut self, packages: Vec<TravelPackage>) -> Self {
        self.packages = packages;
        self
    }

    /// Replace the promotion records; active-window filtering still applies
    /// at read time.
    pub fn with_promotions(mut self, promotions: Vec<Promotion>) -> Self {
        self.promotions = promotions;
        self
    }

    /// Set the statistics singleton.
    pub fn with_stats(mut self, stats: TravelStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// A small sample catalogue for database-less development runs.
    pub fn sample() -> Self {
        let destinations = vec![
            Destination::new(DestinationDraft {
                id: 1,
                name: Some("Kyoto".to_owned()),
                region: Some("Asia".to_owned()),
                image: None,
            }),
            Destination::new(DestinationDraft {
                id: 2,
                name: Some("Lisbon".to_owned()),
                region: Some("Europe".to_owned()),
                image: None,
            }),
        ];
        let packages = vec![TravelPackage::new(TravelPackageDraft {
            id: 1,
            title: Some("Island Hopper".to_owned()),
            description: Some("Seven days across three islands.".to_owned()),
            price: Some(1499),
            image: None,
        })];
        let promotions = vec![Promotion::new(PromotionDraft {
            id: 1,
            description: Some("Early-bird summer booking".to_owned()),
            discount: Some(15),
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MAX,
        })];
        let stats = TravelStats::new(StatsDraft {
            destinations: Some(2),
            tours: Some(14),
            cruises: Some(3),
            hotels: Some(25),
        });

        Self::new()
            .with_destinations(destinations)
            .with_packages(packages)
            .with_promotions(promotions)
            .with_stats(stats)
    }
}

#[async_trait]
impl CatalogueReader for InMemoryCatalogue {
    async fn list_destinations(&self) -> Result<Vec<Destination>, CataloguePersistenceError> {
        Ok(self.destinations.clone())
    }

    async fn list_packages(&self) -> Result<Vec<TravelPackage>, CataloguePersistenceError> {
        Ok(self.packages.clone())
    }

    async fn list_active_promotions(
        &self,
        reference_date: NaiveDate,
    ) -> Result<Vec<Promotion>, CataloguePersistenceError> {
        Ok(self
            .promotions
            .iter()
            .filter(|promotion| promotion.is_active(reference_date))
            .cloned()
            .collect())
    }

    async fn stats(&self) -> Result<Option<TravelStats>, CataloguePersistenceError> {
        Ok(self.stats)
    }
}
