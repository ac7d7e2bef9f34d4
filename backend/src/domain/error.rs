//! Domain-level error type.
//!
//! Transport agnostic: inbound adapters map these errors to HTTP responses
//! (status codes and the error page), while handlers consume the recoverable
//! categories as user-facing form messages.

use serde::{Deserialize, Serialize};

use crate::middleware::trace::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed or is missing.
    Unauthorized,
    /// The request conflicts with existing state (duplicate username/email).
    Conflict,
    /// A backing service (the database) could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// Captures the request's trace identifier when one is in scope so log lines
/// and error responses stay correlated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier for tracing this error across systems.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach an explicit trace identifier.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether the error is recoverable as a form message rather than a page
    /// abort. Store failures are not: they surface as the generic error page.
    pub fn is_form_recoverable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::InvalidRequest | ErrorCode::Unauthorized | ErrorCode::Conflict
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest, true)]
    #[case(Error::unauthorized("no"), ErrorCode::Unauthorized, true)]
    #[case(Error::conflict("dup"), ErrorCode::Conflict, true)]
    #[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable, false)]
    #[case(Error::internal("boom"), ErrorCode::InternalError, false)]
    fn constructors_set_code_and_recoverability(
        #[case] error: Error,
        #[case] expected: ErrorCode,
        #[case] recoverable: bool,
    ) {
        assert_eq!(error.code(), expected);
        assert_eq!(error.is_form_recoverable(), recoverable);
    }

    #[rstest]
    fn display_matches_message() {
        let error = Error::conflict("username or email already taken");
        assert_eq!(error.to_string(), "username or email already taken");
    }

    #[rstest]
    fn with_trace_id_overrides_capture() {
        let error = Error::internal("boom").with_trace_id("abc");
        assert_eq!(error.trace_id(), Some("abc"));
    }

    #[rstest]
    fn codes_serialise_as_snake_case() {
        let serialised =
            serde_json::to_string(&ErrorCode::ServiceUnavailable).expect("serialisable code");
        assert_eq!(serialised, "\"service_unavailable\"");
    }
}
