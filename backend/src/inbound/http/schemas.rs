//! OpenAPI schema definitions for the contact form.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`; the
//! wire shapes documented here live in the adapter layer.

use utoipa::ToSchema;

/// Contact form fields as submitted by the browser.
///
/// Every field is optional on the wire; absent fields are treated as empty.
#[derive(ToSchema)]
#[schema(as = ContactForm)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactFormSchema {
    /// Sender's name, at most 100 characters.
    #[schema(example = "Jane Doe", max_length = 100)]
    name: String,
    /// Sender's email address, at most 255 characters.
    #[schema(example = "jane@example.com", max_length = 255)]
    email: String,
    /// Optional topic.
    #[schema(
        example = "battery",
        pattern = "^(|battery|performance|display|overheating|software|hardware|other)$"
    )]
    category: Option<String>,
    /// Message body, at most 2000 characters.
    #[schema(example = "Phone won't charge", max_length = 2000)]
    message: String,
    /// Requested urgency.
    #[schema(example = "medium", pattern = "^(low|medium|high)$")]
    priority: String,
}
