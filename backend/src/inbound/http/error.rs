//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into consistent responses. Errors that
//! reach this mapping render the generic HTML error page; store failures
//! are redacted so internals never leak to clients.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::render::render_error_page;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Header carrying the request's trace identifier on error responses.
pub const TRACE_ID_HEADER: &str = "trace-id";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message shown on the error page for store failures, instead of internals.
const GENERIC_STORE_MESSAGE: &str =
    "Something went wrong on our side. Please try again later.";

fn public_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::ServiceUnavailable | ErrorCode::InternalError => GENERIC_STORE_MESSAGE,
        _ => error.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        // Log the unredacted error before building the public page.
        error!(code = ?self.code(), message = %self.message(), "request aborted");

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder
            .content_type(ContentType::html())
            .body(render_error_page("Something went wrong", public_message(self)))
    }
}
