//! [`AuthService`] implementation over a [`UserRepository`].
//!
//! Registration hashes the password and inserts in one step; the store's
//! unique constraints arbitrate duplicates, so there is no separate
//! existence check to race against. Login looks up by username or email and
//! verifies the Argon2 hash.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{AuthService, UserPersistenceError, UserRepository};
use crate::domain::{
    Error, LoginCredentials, PasswordHash, Registration, UserAccount, UserId,
};

/// Message shown for any credential mismatch. Deliberately identical for an
/// unknown identifier and a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid login credentials.";

/// Message shown when a registration collides with an existing account.
const ALREADY_TAKEN: &str = "Username or email already taken.";

/// Password-verifying auth service over a pluggable user repository.
#[derive(Clone)]
pub struct PasswordAuthService {
    users: Arc<dyn UserRepository>,
}

impl PasswordAuthService {
    /// Create a service backed by the given repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

/// Shared mapping from user persistence failures to domain errors.
fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::Duplicate { field } => {
            // Persisted uniqueness beat us to it; report the same conflict a
            // sequential duplicate would produce.
            warn!(field, "registration lost a uniqueness race");
            Error::conflict(ALREADY_TAKEN)
        }
    }
}

#[async_trait]
impl AuthService for PasswordAuthService {
    async fn register(&self, registration: &Registration) -> Result<UserAccount, Error> {
        let password_hash = PasswordHash::derive(registration.password())
            .map_err(|err| Error::internal(err.to_string()))?;
        let account = UserAccount::new(
            UserId::random(),
            registration.username().clone(),
            registration.email().clone(),
            password_hash,
        );

        self.users
            .insert(&account)
            .await
            .map_err(map_user_persistence_error)?;
        Ok(account)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserAccount, Error> {
        let account = self
            .users
            .find_by_identifier(credentials.identifier())
            .await
            .map_err(map_user_persistence_error)?;

        match account {
            Some(account) if account.password_hash().verify(credentials.password()) => {
                Ok(account)
            }
            _ => Err(Error::unauthorized(INVALID_CREDENTIALS)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for registration conflicts, credential checks,
    //! and persistence-failure mapping.
    use std::sync::Mutex;

    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[derive(Clone, Copy)]
    enum StubFailure {
        Connection,
        Query,
        Duplicate,
    }

    impl StubFailure {
        fn to_error(self) -> UserPersistenceError {
            match self {
                Self::Connection => UserPersistenceError::connection("database unavailable"),
                Self::Query => UserPersistenceError::query("database query failed"),
                Self::Duplicate => UserPersistenceError::duplicate("username"),
            }
        }
    }

    #[derive(Default)]
    struct StubState {
        accounts: Vec<UserAccount>,
        insert_failure: Option<StubFailure>,
        find_failure: Option<StubFailure>,
    }

    #[derive(Default)]
    struct StubUserRepository {
        state: Mutex<StubState>,
    }

    impl StubUserRepository {
        fn set_insert_failure(&self, failure: StubFailure) {
            self.state.lock().expect("state lock").insert_failure = Some(failure);
        }

        fn set_find_failure(&self, failure: StubFailure) {
            self.state.lock().expect("state lock").find_failure = Some(failure);
        }

        fn stored_accounts(&self) -> Vec<UserAccount> {
            self.state.lock().expect("state lock").accounts.clone()
        }
    }

    #[async_trait]
    impl UserRepository for StubUserRepository {
        async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
            let mut state = self.state.lock().expect("state lock");
            if let Some(failure) = state.insert_failure {
                return Err(failure.to_error());
            }
            state.accounts.push(account.clone());
            Ok(())
        }

        async fn find_by_identifier(
            &self,
            identifier: &str,
        ) -> Result<Option<UserAccount>, UserPersistenceError> {
            let state = self.state.lock().expect("state lock");
            if let Some(failure) = state.find_failure {
                return Err(failure.to_error());
            }
            Ok(state
                .accounts
                .iter()
                .find(|account| {
                    account.username().as_ref() == identifier
                        || account.email().as_ref() == identifier
                })
                .cloned())
        }
    }

    fn registration(username: &str, email: &str, password: &str) -> Registration {
        Registration::try_from_parts(username, email, password).expect("valid registration")
    }

    fn credentials(identifier: &str, password: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts(identifier, password).expect("valid credentials shape")
    }

    fn service_with_repository() -> (PasswordAuthService, Arc<StubUserRepository>) {
        let repository = Arc::new(StubUserRepository::default());
        (PasswordAuthService::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_password() {
        let (service, repository) = service_with_repository();

        let account = service
            .register(&registration("alice", "alice@example.com", "secret123"))
            .await
            .expect("registration should succeed");

        assert_eq!(account.username().as_ref(), "alice");
        let stored = repository.stored_accounts();
        assert_eq!(stored.len(), 1);
        assert_ne!(stored[0].password_hash().as_str(), "secret123");
        assert!(stored[0].password_hash().verify("secret123"));
    }

    #[tokio::test]
    async fn register_maps_duplicates_to_conflict() {
        let (service, repository) = service_with_repository();
        repository.set_insert_failure(StubFailure::Duplicate);

        let err = service
            .register(&registration("alice", "alice@example.com", "secret123"))
            .await
            .expect_err("duplicate must fail");

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), ALREADY_TAKEN);
    }

    #[rstest]
    #[case("alice")]
    #[case("alice@example.com")]
    #[tokio::test]
    async fn authenticate_accepts_username_or_email(#[case] identifier: &str) {
        let (service, _repository) = service_with_repository();
        service
            .register(&registration("alice", "alice@example.com", "secret123"))
            .await
            .expect("registration should succeed");

        let account = service
            .authenticate(&credentials(identifier, "secret123"))
            .await
            .expect("correct credentials should authenticate");
        assert_eq!(account.username().as_ref(), "alice");
    }

    #[rstest]
    #[case("alice", "wrong password")]
    #[case("nobody", "secret123")]
    #[tokio::test]
    async fn authenticate_rejects_mismatches_identically(
        #[case] identifier: &str,
        #[case] password: &str,
    ) {
        let (service, _repository) = service_with_repository();
        service
            .register(&registration("alice", "alice@example.com", "secret123"))
            .await
            .expect("registration should succeed");

        let err = service
            .authenticate(&credentials(identifier, password))
            .await
            .expect_err("mismatch must fail");

        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), INVALID_CREDENTIALS);
    }

    // Identifier matching stays case-sensitive.
    #[tokio::test]
    async fn authenticate_is_case_sensitive() {
        let (service, _repository) = service_with_repository();
        service
            .register(&registration("alice", "alice@example.com", "secret123"))
            .await
            .expect("registration should succeed");

        let err = service
            .authenticate(&credentials("Alice", "secret123"))
            .await
            .expect_err("case mismatch must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case(StubFailure::Connection, ErrorCode::ServiceUnavailable)]
    #[case(StubFailure::Query, ErrorCode::InternalError)]
    #[tokio::test]
    async fn register_maps_store_failures(
        #[case] failure: StubFailure,
        #[case] expected_code: ErrorCode,
    ) {
        let (service, repository) = service_with_repository();
        repository.set_insert_failure(failure);

        let err = service
            .register(&registration("alice", "alice@example.com", "secret123"))
            .await
            .expect_err("store failures should surface as domain errors");
        assert_eq!(err.code(), expected_code);
    }

    #[rstest]
    #[case(StubFailure::Connection, ErrorCode::ServiceUnavailable)]
    #[case(StubFailure::Query, ErrorCode::InternalError)]
    #[tokio::test]
    async fn authenticate_maps_store_failures(
        #[case] failure: StubFailure,
        #[case] expected_code: ErrorCode,
    ) {
        let (service, repository) = service_with_repository();
        repository.set_find_failure(failure);

        let err = service
            .authenticate(&credentials("alice", "secret123"))
            .await
            .expect_err("store failures should surface as domain errors");
        assert_eq!(err.code(), expected_code);
    }
}
