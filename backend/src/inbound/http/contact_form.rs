//! Decoding of contact form bodies.
//!
//! Browsers submit either `application/x-www-form-urlencoded` or
//! `multipart/form-data`. Both decode into the same [`ContactDraft`]; absent
//! fields become empty strings and unknown fields are ignored. Trimming and
//! validation belong to the domain.

use actix_multipart::Multipart;
use actix_web::error::UrlencodedError;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::TryStreamExt;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{ContactDraft, Error};

/// Upper bound on a decoded form body, in bytes.
pub const MAX_FORM_BYTES: usize = 64 * 1024;

/// Body returned when the request cannot be decoded as a form.
pub const MALFORMED_FORM_MESSAGE: &str = "Malformed form submission.";

/// Body returned when the form exceeds [`MAX_FORM_BYTES`].
pub const FORM_TOO_LARGE_MESSAGE: &str = "Form submission is too large.";

/// Urlencoded wire shape. Every field is optional on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct ContactFormPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub priority: Option<String>,
}

impl From<ContactFormPayload> for ContactDraft {
    fn from(payload: ContactFormPayload) -> Self {
        Self {
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            category: payload.category.unwrap_or_default(),
            message: payload.message.unwrap_or_default(),
            priority: payload.priority.unwrap_or_default(),
        }
    }
}

/// Form extractor configuration applied to the contact resource.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().limit(MAX_FORM_BYTES)
}

fn malformed(reason: impl std::fmt::Display) -> Error {
    debug!(%reason, "contact form body rejected");
    Error::invalid_request(MALFORMED_FORM_MESSAGE)
}

fn too_large() -> Error {
    debug!(limit = MAX_FORM_BYTES, "contact form body exceeds limit");
    Error::invalid_request(FORM_TOO_LARGE_MESSAGE)
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.content_type().eq_ignore_ascii_case("multipart/form-data")
}

/// Decode the request body into a draft, choosing the decoder from the
/// request's `Content-Type`.
///
/// # Errors
///
/// Returns an `InvalidRequest` error when the body is not a decodable form
/// or exceeds [`MAX_FORM_BYTES`].
pub async fn read_draft(req: &HttpRequest, payload: web::Payload) -> Result<ContactDraft, Error> {
    if is_multipart(req) {
        read_multipart(req, payload).await
    } else {
        read_urlencoded(req, payload).await
    }
}

async fn read_urlencoded(req: &HttpRequest, payload: web::Payload) -> Result<ContactDraft, Error> {
    let mut payload = payload.into_inner();
    match web::Form::<ContactFormPayload>::from_request(req, &mut payload).await {
        Ok(form) => Ok(form.into_inner().into()),
        Err(err) => match err.as_error::<UrlencodedError>() {
            Some(UrlencodedError::Overflow { .. }) => Err(too_large()),
            _ => Err(malformed(err)),
        },
    }
}

fn assign(draft: &mut ContactDraft, field: &str, value: String) {
    match field {
        "name" => draft.name = value,
        "email" => draft.email = value,
        "category" => draft.category = value,
        "message" => draft.message = value,
        "priority" => draft.priority = value,
        _ => {}
    }
}

async fn read_multipart(req: &HttpRequest, payload: web::Payload) -> Result<ContactDraft, Error> {
    let mut multipart = Multipart::new(req.headers(), payload);
    let mut draft = ContactDraft::default();
    let mut total = 0_usize;

    while let Some(mut field) = multipart.try_next().await.map_err(malformed)? {
        let name = field.name().map(str::to_owned);
        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(malformed)? {
            total = total.saturating_add(chunk.len());
            if total > MAX_FORM_BYTES {
                return Err(too_large());
            }
            bytes.extend_from_slice(&chunk);
        }

        let Some(name) = name else { continue };
        let value = String::from_utf8(bytes).map_err(malformed)?;
        assign(&mut draft, &name, value);
    }

    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    async fn decode(request: TestRequest) -> Result<ContactDraft, Error> {
        let (req, mut payload) = request.app_data(form_config()).to_http_parts();
        let payload = web::Payload::from_request(&req, &mut payload)
            .await
            .expect("payload extractor is infallible");
        read_draft(&req, payload).await
    }

    fn multipart_body(boundary: &str, fields: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));
        body
    }

    #[rstest]
    #[actix_web::test]
    async fn urlencoded_fields_are_read_untrimmed() {
        let request = TestRequest::post()
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("name=+Jane+Doe+&email=jane%40example.com&priority=high&colour=red");

        let draft = decode(request).await.expect("decodes");
        assert_eq!(draft.name, " Jane Doe ");
        assert_eq!(draft.email, "jane@example.com");
        assert_eq!(draft.priority, "high");
        assert_eq!(draft.category, "");
        assert_eq!(draft.message, "");
    }

    #[rstest]
    #[actix_web::test]
    async fn multipart_fields_are_read() {
        let boundary = "contact-boundary";
        let body = multipart_body(
            boundary,
            &[
                ("name", "Jane Doe"),
                ("email", "jane@example.com"),
                ("category", "battery"),
                ("message", "Phone won't charge"),
                ("priority", "high"),
                ("attachment", "ignored"),
            ],
        );
        let request = TestRequest::post()
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(body);

        let draft = decode(request).await.expect("decodes");
        assert_eq!(draft.name, "Jane Doe");
        assert_eq!(draft.category, "battery");
        assert_eq!(draft.message, "Phone won't charge");
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_content_type_is_malformed() {
        let request = TestRequest::post().set_payload("name=Jane");

        let error = decode(request).await.expect_err("rejected");
        assert_eq!(error.message(), MALFORMED_FORM_MESSAGE);
    }

    #[rstest]
    #[actix_web::test]
    async fn oversized_multipart_body_is_rejected() {
        let boundary = "contact-boundary";
        let huge = "x".repeat(MAX_FORM_BYTES + 1);
        let body = multipart_body(boundary, &[("message", huge.as_str())]);
        let request = TestRequest::post()
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            ))
            .set_payload(body);

        let error = decode(request).await.expect_err("rejected");
        assert_eq!(error.message(), FORM_TOO_LARGE_MESSAGE);
    }
}
