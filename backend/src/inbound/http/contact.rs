//! Contact form submission endpoint.
//!
//! ```text
//! POST /api/v1/contact
//! ```
//!
//! Any other method on the same path is answered with 405 and `Allow: POST`.

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Resource, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::contact_form::{form_config, read_draft};
use crate::inbound::http::error::METHOD_NOT_ALLOWED_MESSAGE;
use crate::inbound::http::state::HttpState;

/// Body returned once a submission is stored.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Accept a contact form, validate it, and store it.
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body(
        content = crate::inbound::http::schemas::ContactFormSchema,
        content_type = "application/x-www-form-urlencoded",
        description = "Contact form fields; multipart/form-data is also accepted"
    ),
    responses(
        (status = 200, description = "Submission stored", body = String,
            content_type = "text/plain"),
        (status = 400, description = "One violation message per line", body = String,
            content_type = "text/plain"),
        (status = 405, description = "Method other than POST", body = String,
            content_type = "text/plain"),
        (status = 500, description = "Submission could not be stored", body = String,
            content_type = "text/plain")
    ),
    tags = ["contact"],
    operation_id = "submitContact"
)]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let draft = read_draft(&req, payload).await?;
    state.contact.submit(draft).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(SUCCESS_MESSAGE))
}

/// Fallback for every non-POST method on the contact path.
pub async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed(METHOD_NOT_ALLOWED_MESSAGE))
}

/// The `/contact` resource, ready to mount under a scope.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use contact_backend::inbound::http::contact::contact_resource;
///
/// let app = App::new().service(web::scope("/api/v1").service(contact_resource()));
/// ```
pub fn contact_resource() -> Resource {
    web::resource("/contact")
        .app_data(form_config())
        .route(web::post().to(submit_contact))
        .default_service(web::to(method_not_allowed))
}

#[cfg(test)]
#[path = "contact_tests.rs"]
mod tests;
