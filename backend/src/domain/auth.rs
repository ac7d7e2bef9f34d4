//! Authentication inputs: login credentials and registration requests.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::user::{EmailAddress, UserValidationError, Username};

/// Minimum allowed password length, in characters.
pub const PASSWORD_MIN: usize = 6;

/// Domain error returned when login or registration payload values are
/// invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Login identifier was missing or blank once trimmed.
    EmptyIdentifier,
    /// Password was blank.
    EmptyPassword,
    /// Password is shorter than [`PASSWORD_MIN`] characters.
    PasswordTooShort { min: usize },
    /// Username or email failed component validation.
    Account(UserValidationError),
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyIdentifier => write!(f, "username or email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordTooShort { min } => {
                write!(f, "Password must be at least {min} characters.")
            }
            Self::Account(inner) => write!(f, "{inner}"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

impl From<UserValidationError> for AuthValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::Account(value)
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `identifier` is trimmed and non-empty; it may be a username or an email
///   address and is matched case-sensitively against stored accounts.
/// - `password` is non-empty but retains caller-provided whitespace to avoid
///   surprising credential comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    identifier: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw identifier/password inputs.
    pub fn try_from_parts(
        identifier: &str,
        password: &str,
    ) -> Result<Self, AuthValidationError> {
        let normalized = identifier.trim();
        if normalized.is_empty() {
            return Err(AuthValidationError::EmptyIdentifier);
        }
        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }

        Ok(Self {
            identifier: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Identifier string suitable for account lookups.
    pub fn identifier(&self) -> &str {
        self.identifier.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration request.
///
/// Construction enforces every shape rule, so a value of this type is always
/// safe to hand to the auth service; only uniqueness remains to be checked
/// against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl Registration {
    /// Construct a registration from raw form inputs.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AuthValidationError> {
        let username = Username::new(username)?;
        let email = EmailAddress::new(email)?;
        if password.chars().count() < PASSWORD_MIN {
            return Err(AuthValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }

        Ok(Self {
            username,
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested account name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Plaintext password to be hashed by the auth service.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
