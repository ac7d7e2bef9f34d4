//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed domain entities used by the HTTP and
//! persistence layers. Keep types immutable and document invariants in each
//! type's Rustdoc.

pub mod auth;
pub mod catalogue;
pub mod error;
pub mod password;
pub mod ports;
pub mod user;

pub use self::auth::{AuthValidationError, LoginCredentials, PASSWORD_MIN, Registration};
pub use self::error::{Error, ErrorCode};
pub use self::password::{PasswordHash, PasswordHashError};
pub use self::user::{EmailAddress, UserAccount, UserId, UserValidationError, Username};

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
