//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning domain
//! failures into plain-text responses with consistent status codes. Internal
//! failures are redacted to a fixed apology; the detail stays in the logs.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Body returned for any store or connectivity failure.
pub const STORE_FAILURE_MESSAGE: &str =
    "Sorry, we could not save your message right now. Please try again later.";

/// Body returned when the contact endpoint is called with a method other
/// than POST.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Invalid request method.";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InternalError => STORE_FAILURE_MESSAGE,
        ErrorCode::InvalidRequest | ErrorCode::MethodNotAllowed => error.message(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        builder.content_type(ContentType::plaintext());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        if self.code() == ErrorCode::MethodNotAllowed {
            builder.insert_header((header::ALLOW, "POST"));
        }

        builder.body(public_message(self).to_owned())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
