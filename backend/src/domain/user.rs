//! User account aggregate and its validated components.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before anything touches a port or adapter.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::password::PasswordHash;

/// Validation errors returned by the account component constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// User id was not a valid UUID.
    InvalidId,
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Username exceeds [`USERNAME_MAX`] characters.
    UsernameTooLong { max: usize },
    /// Username contains characters outside letters, digits, or underscores.
    UsernameInvalidCharacters,
    /// Email address does not have a `local@domain` shape.
    InvalidEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::UsernameInvalidCharacters => {
                write!(f, "username may only contain letters, numbers, or underscores")
            }
            Self::InvalidEmail => write!(f, "email address is not valid"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random identifier for a freshly registered account.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form.
    pub fn parse(raw: &str) -> Result<Self, UserValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 32;

/// Unique account name chosen at registration.
///
/// ## Invariants
/// - Trimmed and non-empty.
/// - At most [`USERNAME_MAX`] characters.
/// - Contains only letters, digits, or underscores.
///
/// Matching against stored usernames is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(username.into())
    }

    fn from_owned(username: String) -> Result<Self, UserValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if normalized.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(UserValidationError::UsernameInvalidCharacters);
        }
        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Unique email address chosen at registration.
///
/// The shape check is deliberately loose: a non-empty local part and domain
/// separated by a single leading `@` split. Deliverability is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, UserValidationError> {
        let normalized = email.trim();
        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(UserValidationError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(UserValidationError::InvalidEmail);
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Registered user account.
///
/// ## Invariants
/// - `username` and `email` are unique across the store (enforced by the
///   storage layer's constraints, not just application checks).
/// - The password is held only as a one-way salted hash.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    id: UserId,
    username: Username,
    email: EmailAddress,
    password_hash: PasswordHash,
}

impl UserAccount {
    /// Build an account from validated components.
    pub fn new(
        id: UserId,
        username: Username,
        email: EmailAddress,
        password_hash: PasswordHash,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
        }
    }

    /// Stable account identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique account name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Unique email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored one-way password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UserValidationError::EmptyUsername)]
    #[case("   ", UserValidationError::EmptyUsername)]
    #[case("has space", UserValidationError::UsernameInvalidCharacters)]
    #[case("semi;colon", UserValidationError::UsernameInvalidCharacters)]
    fn invalid_usernames(#[case] raw: &str, #[case] expected: UserValidationError) {
        let err = Username::new(raw).expect_err("invalid username must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn username_longer_than_max_is_rejected() {
        let raw = "a".repeat(USERNAME_MAX + 1);
        let err = Username::new(raw).expect_err("oversized username must fail");
        assert_eq!(err, UserValidationError::UsernameTooLong { max: USERNAME_MAX });
    }

    #[rstest]
    #[case("  alice  ", "alice")]
    #[case("Bob_42", "Bob_42")]
    fn valid_usernames_are_trimmed(#[case] raw: &str, #[case] expected: &str) {
        let username = Username::new(raw).expect("valid username");
        assert_eq!(username.as_ref(), expected);
    }

    #[rstest]
    #[case("no-at-sign")]
    #[case("@missing-local")]
    #[case("missing-domain@")]
    #[case("two@at@signs")]
    #[case("spaced out@example.com")]
    fn invalid_emails(#[case] raw: &str) {
        let err = EmailAddress::new(raw).expect_err("invalid email must fail");
        assert_eq!(err, UserValidationError::InvalidEmail);
    }

    #[rstest]
    fn valid_email_is_trimmed() {
        let email = EmailAddress::new(" alice@example.com ").expect("valid email");
        assert_eq!(email.as_ref(), "alice@example.com");
    }

    #[rstest]
    fn user_id_round_trips_through_strings() {
        let id = UserId::random();
        let parsed = UserId::parse(&id.to_string()).expect("own string form parses");
        assert_eq!(parsed, id);
    }

    #[rstest]
    fn user_id_rejects_garbage() {
        let err = UserId::parse("not-a-uuid").expect_err("garbage must fail");
        assert_eq!(err, UserValidationError::InvalidId);
    }
}
