//! Diesel-backed [`UserRepository`] adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;

use crate::domain::UserAccount;
use crate::domain::ports::{UserPersistenceError, UserRepository};

use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// PostgreSQL user repository over the shared connection pool.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map an insert failure, folding unique-constraint violations into
/// [`UserPersistenceError::Duplicate`] so raced registrations surface the
/// same way as sequential ones.
fn map_insert_error(error: DieselError) -> UserPersistenceError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            let field = match info.constraint_name() {
                Some(name) if name.contains("email") => "email",
                _ => "username",
            };
            UserPersistenceError::duplicate(field)
        }
        other => UserPersistenceError::query(other.to_string()),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| UserPersistenceError::connection(err.to_string()))?;

        diesel::insert_into(users::table)
            .values(NewUserRow::from(account))
            .execute(&mut conn)
            .await
            .map_err(map_insert_error)?;
        Ok(())
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| UserPersistenceError::connection(err.to_string()))?;

        let row: Option<UserRow> = users::table
            .filter(
                users::username
                    .eq(identifier)
                    .or(users::email.eq(identifier)),
            )
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;

        row.map(UserRow::into_account).transpose()
    }
}
