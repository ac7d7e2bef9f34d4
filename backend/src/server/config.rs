//! HTTP server configuration loaded from the environment.
//!
//! Recognised variables:
//! - `SESSION_KEY_FILE` — path to the session signing/encryption key
//!   material (default `/var/run/secrets/session_key`).
//! - `SESSION_ALLOW_EPHEMERAL` — set to `1` to fall back to a generated key
//!   when the file is unreadable; always allowed in debug builds.
//! - `SESSION_COOKIE_SECURE` — set to `0` to drop the `Secure` cookie flag
//!   for plain-HTTP deployments.
//! - `BIND_ADDR` — socket address to listen on (default `0.0.0.0:8080`).
//! - `DATABASE_URL` — PostgreSQL connection string; when absent the server
//!   runs on in-memory adapters.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::Key;
use tracing::warn;

const DEFAULT_KEY_PATH: &str = "/var/run/secrets/session_key";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    key: Key,
    cookie_secure: bool,
    bind_addr: SocketAddr,
    database_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails when the session key file cannot be read in a release build
    /// without `SESSION_ALLOW_EPHEMERAL=1`, or when `BIND_ADDR` does not
    /// parse as a socket address.
    pub fn from_env() -> std::io::Result<Self> {
        let key_path =
            env::var("SESSION_KEY_FILE").unwrap_or_else(|_| DEFAULT_KEY_PATH.to_owned());
        let key = match std::fs::read(&key_path) {
            Ok(bytes) => Key::derive_from(&bytes),
            Err(e) => {
                let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
                if cfg!(debug_assertions) || allow_dev {
                    warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                    Key::generate()
                } else {
                    return Err(std::io::Error::other(format!(
                        "failed to read session key at {key_path}: {e}"
                    )));
                }
            }
        };

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|v| v != "0")
            .unwrap_or(true);

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned())
            .parse::<SocketAddr>()
            .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        Ok(Self {
            key,
            cookie_secure,
            bind_addr,
            database_url,
        })
    }

    /// Session cookie signing/encryption key.
    pub fn key(&self) -> Key {
        self.key.clone()
    }

    /// Whether the session cookie carries the `Secure` flag.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// PostgreSQL connection string, if configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
}
