//! Row structs bridging the Diesel schema and domain types.
//!
//! Reads come back as `*Row` structs and are mapped into domain records;
//! placeholder substitution for optional display columns happens in the
//! domain constructors, not here.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::catalogue::{
    Destination, DestinationDraft, Promotion, PromotionDraft, StatsDraft, TravelPackage,
    TravelPackageDraft, TravelStats,
};
use crate::domain::ports::UserPersistenceError;
use crate::domain::{EmailAddress, PasswordHash, UserAccount, UserId, Username};

use super::schema::{destinations, promotions, stats, travel_packages, users};

/// Row read from `users`.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// Re-validate a stored row into the domain aggregate.
    ///
    /// A row that fails validation means the table was mutated outside this
    /// application; surface it as a query error rather than a panic.
    pub fn into_account(self) -> Result<UserAccount, UserPersistenceError> {
        let username = Username::new(self.username)
            .map_err(|err| UserPersistenceError::query(format!("stored username: {err}")))?;
        let email = EmailAddress::new(self.email)
            .map_err(|err| UserPersistenceError::query(format!("stored email: {err}")))?;
        let password_hash = PasswordHash::from_stored(self.password_hash)
            .map_err(|err| UserPersistenceError::query(format!("stored hash: {err}")))?;
        Ok(UserAccount::new(
            UserId::from(self.id),
            username,
            email,
            password_hash,
        ))
    }
}

/// Insertable row for `users`. `created_at` is filled by the column default.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

impl<'a> From<&'a UserAccount> for NewUserRow<'a> {
    fn from(account: &'a UserAccount) -> Self {
        Self {
            id: *account.id().as_uuid(),
            username: account.username().as_ref(),
            email: account.email().as_ref(),
            password_hash: account.password_hash().as_str(),
        }
    }
}

/// Row read from `destinations`.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = destinations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DestinationRow {
    pub id: i32,
    pub name: Option<String>,
    pub region: Option<String>,
    pub image: Option<String>,
}

impl From<DestinationRow> for Destination {
    fn from(row: DestinationRow) -> Self {
        Destination::new(DestinationDraft {
            id: row.id,
            name: row.name,
            region: row.region,
            image: row.image,
        })
    }
}

/// Row read from `travel_packages`.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = travel_packages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TravelPackageRow {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub image: Option<String>,
}

impl From<TravelPackageRow> for TravelPackage {
    fn from(row: TravelPackageRow) -> Self {
        TravelPackage::new(TravelPackageDraft {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            image: row.image,
        })
    }
}

/// Row read from `promotions`.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = promotions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PromotionRow {
    pub id: i32,
    pub description: Option<String>,
    pub discount: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<PromotionRow> for Promotion {
    fn from(row: PromotionRow) -> Self {
        Promotion::new(PromotionDraft {
            id: row.id,
            description: row.description,
            discount: row.discount,
            start_date: row.start_date,
            end_date: row.end_date,
        })
    }
}

/// Row read from `stats`.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StatsRow {
    pub id: i32,
    pub destinations: Option<i32>,
    pub tours: Option<i32>,
    pub cruises: Option<i32>,
    pub hotels: Option<i32>,
}

impl From<StatsRow> for TravelStats {
    fn from(row: StatsRow) -> Self {
        TravelStats::new(StatsDraft {
            destinations: row.destinations,
            tours: row.tours,
            cruises: row.cruises,
            hotels: row.hotels,
        })
    }
}
