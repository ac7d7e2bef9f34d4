//! Diesel-backed [`CatalogueReader`] adapter.
//!
//! Pure reads: every method checks out one pooled connection, runs a single
//! query ordered by id, and maps rows into display-ready domain records.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::catalogue::{Destination, Promotion, TravelPackage, TravelStats};
use crate::domain::ports::{CatalogueReader, CataloguePersistenceError};

use super::models::{DestinationRow, PromotionRow, StatsRow, TravelPackageRow};
use super::pool::DbPool;
use super::schema::{destinations, promotions, stats, travel_packages};

/// PostgreSQL catalogue reader over the shared connection pool.
#[derive(Clone)]
pub struct DieselCatalogueReader {
    pool: DbPool,
}

impl DieselCatalogueReader {
    /// Create a reader backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn conn(
        &self,
    ) -> Result<
        diesel_async::pooled_connection::bb8::PooledConnection<'_, diesel_async::AsyncPgConnection>,
        CataloguePersistenceError,
    > {
        self.pool
            .get()
            .await
            .map_err(|err| CataloguePersistenceError::connection(err.to_string()))
    }
}

fn query_error(err: diesel::result::Error) -> CataloguePersistenceError {
    CataloguePersistenceError::query(err.to_string())
}

#[async_trait]
impl CatalogueReader for DieselCatalogueReader {
    async fn list_destinations(&self) -> Result<Vec<Destination>, CataloguePersistenceError> {
        let mut conn = self.conn().await?;
        let rows: Vec<DestinationRow> = destinations::table
            .order(destinations::id.asc())
            .select(DestinationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(query_error)?;
        Ok(rows.into_iter().map(Destination::from).collect())
    }

    async fn list_packages(&self) -> Result<Vec<TravelPackage>, CataloguePersistenceError> {
        let mut conn = self.conn().await?;
        let rows: Vec<TravelPackageRow> = travel_packages::table
            .order(travel_packages::id.asc())
            .select(TravelPackageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(query_error)?;
        Ok(rows.into_iter().map(TravelPackage::from).collect())
    }

    async fn list_active_promotions(
        &self,
        reference_date: NaiveDate,
    ) -> Result<Vec<Promotion>, CataloguePersistenceError> {
        let mut conn = self.conn().await?;
        // Inclusive on both bounds: start <= reference <= end.
        let rows: Vec<PromotionRow> = promotions::table
            .filter(promotions::start_date.le(reference_date))
            .filter(promotions::end_date.ge(reference_date))
            .order(promotions::id.asc())
            .select(PromotionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(query_error)?;
        Ok(rows.into_iter().map(Promotion::from).collect())
    }

    async fn stats(&self) -> Result<Option<TravelStats>, CataloguePersistenceError> {
        let mut conn = self.conn().await?;
        let row: Option<StatsRow> = stats::table
            .order(stats::id.asc())
            .select(StatsRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(query_error)?;
        Ok(row.map(TravelStats::from))
    }
}
