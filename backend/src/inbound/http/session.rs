//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: signing an account in or out and reading the
//! current identity. The session holds at most one identity; signing in
//! replaces whatever was there.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, UserAccount, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const USERNAME_KEY: &str = "username";

/// Identity stored in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
}

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record a successful login.
    ///
    /// The session identifier is renewed first, so a cookie captured before
    /// authentication cannot be replayed into the authenticated session
    /// (fixation mitigation).
    pub fn sign_in(&self, account: &UserAccount) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, account.id().to_string())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))?;
        self.0
            .insert(USERNAME_KEY, account.username().as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))?;
        Ok(())
    }

    /// Destroy the session state. A no-op when nothing is signed in.
    pub fn sign_out(&self) {
        self.0.purge();
    }

    /// Fetch the current identity from the session, if present.
    ///
    /// A cookie whose stored id no longer parses is treated as anonymous
    /// rather than an error; tampering should not grant a 500.
    pub fn current_user(&self) -> Result<Option<SessionUser>, Error> {
        let raw_id = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        let username = self
            .0
            .get::<String>(USERNAME_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;

        match (raw_id, username) {
            (Some(raw_id), Some(username)) => match UserId::parse(&raw_id) {
                Ok(id) => Ok(Some(SessionUser { id, username })),
                Err(error) => {
                    tracing::warn!("invalid user id in session cookie: {error}");
                    Ok(None)
                }
            },
            _ => Ok(None),
        }
    }

    /// Whether the session carries an authenticated identity.
    pub fn is_authenticated(&self) -> Result<bool, Error> {
        Ok(self.current_user()?.is_some())
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
