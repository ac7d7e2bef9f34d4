//! HTTP server assembly helpers.

pub mod config;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};

pub use config::ServerConfig;

/// Build the cookie-backed session middleware.
///
/// The cookie is `HttpOnly` with `SameSite=Lax`; the identifier inside is
/// renewed on login by the session wrapper.
pub fn session_middleware(
    key: Key,
    cookie_secure: bool,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}
