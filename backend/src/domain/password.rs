//! One-way password hashing.
//!
//! Passwords are hashed with Argon2id through the PHC string format, so a
//! stored hash carries its own salt and parameters. Plaintext passwords never
//! leave this module's call boundary and are never logged or formatted.

use std::fmt;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
};

/// Errors produced when deriving or loading a password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordHashError {
    /// Hash derivation failed inside the Argon2 implementation.
    Derivation,
    /// A stored value was not a parseable PHC hash string.
    Malformed,
}

impl fmt::Display for PasswordHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derivation => write!(f, "failed to derive password hash"),
            Self::Malformed => write!(f, "stored password hash is malformed"),
        }
    }
}

impl std::error::Error for PasswordHashError {}

/// Salted Argon2id hash of an account password, in PHC string form.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Derive a new hash from a plaintext password with a fresh random salt.
    pub fn derive(password: &str) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| PasswordHashError::Derivation)?;
        Ok(Self(hash.to_string()))
    }

    /// Load a hash previously persisted by [`PasswordHash::derive`].
    pub fn from_stored(raw: impl Into<String>) -> Result<Self, PasswordHashError> {
        let raw = raw.into();
        PhcHash::new(&raw).map_err(|_| PasswordHashError::Malformed)?;
        Ok(Self(raw))
    }

    /// Verify a plaintext password against this hash.
    ///
    /// Returns `false` for any mismatch, including a hash that no longer
    /// parses; callers never learn why verification failed.
    pub fn verify(&self, password: &str) -> bool {
        match PhcHash::new(&self.0) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// PHC string form for persistence.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

// The PHC string embeds no plaintext, but keep it out of logs anyway.
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
