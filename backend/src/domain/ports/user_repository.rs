//! Driven port for user account persistence.

use std::fmt;

use async_trait::async_trait;

use crate::domain::user::UserAccount;

/// Failures surfaced by user persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserPersistenceError {
    /// The store could not be reached or a connection could not be checked
    /// out of the pool.
    Connection { message: String },
    /// A query failed or returned rows that no longer satisfy the domain's
    /// invariants.
    Query { message: String },
    /// An insert collided with the store's uniqueness constraints.
    ///
    /// `field` names the colliding column (`username` or `email`). Raced
    /// inserts surface here too: the constraint, not the application check,
    /// is the arbiter.
    Duplicate { field: String },
}

impl UserPersistenceError {
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

    /// Create a duplicate-value error naming the colliding column.
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
        }
    }
}

impl fmt::Display for UserPersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection { message } => {
                write!(f, "failed to reach the user store: {message}")
            }
            Self::Query { message } => write!(f, "user store query failed: {message}"),
            Self::Duplicate { field } => write!(f, "duplicate {field} value"),
        }
    }
}

impl std::error::Error for UserPersistenceError {}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a freshly registered account.
    ///
    /// Duplicate usernames or emails must surface as
    /// [`UserPersistenceError::Duplicate`].
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError>;

    /// Look up an account whose username **or** email equals `identifier`,
    /// matched case-sensitively.
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError>;
}
