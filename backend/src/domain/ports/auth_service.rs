//! Driving port for registration and login use-cases.
//!
//! Inbound adapters call this to mutate the credential store without knowing
//! (or importing) the backing infrastructure, which keeps HTTP handler tests
//! deterministic: they substitute a test double instead of wiring
//! persistence and password hashing.

use async_trait::async_trait;

use crate::domain::auth::{LoginCredentials, Registration};
use crate::domain::error::Error;
use crate::domain::user::UserAccount;

/// Domain use-case port for authentication.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a new account from a validated registration.
    ///
    /// Fails with [`crate::domain::error::ErrorCode::Conflict`] when the
    /// username or email is already taken.
    async fn register(&self, registration: &Registration) -> Result<UserAccount, Error>;

    /// Verify credentials and return the matching account.
    ///
    /// Fails with [`crate::domain::error::ErrorCode::Unauthorized`] on any
    /// mismatch; the message never distinguishes an unknown identifier from
    /// a wrong password.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserAccount, Error>;
}
