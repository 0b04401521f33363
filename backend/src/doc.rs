//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the contact endpoint, the health probes, and the
//! contact form schema. The document backs Swagger UI in debug builds and is
//! exported by `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::ContactFormSchema;

/// OpenAPI document for the contact backend.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact form backend API",
        description = "Accepts contact form submissions and stores them for follow-up."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ContactFormSchema)),
    tags(
        (name = "contact", description = "Contact form submission"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    #[test]
    fn contact_path_is_documented_as_post() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/api/v1/contact")
            .expect("contact path");

        assert!(item.post.is_some());
        assert!(item.get.is_none());
    }

    #[test]
    fn contact_form_schema_lists_every_field() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let form = schemas.get("ContactForm").expect("ContactForm schema");

        match form {
            RefOr::T(Schema::Object(obj)) => {
                for field in ["name", "email", "category", "message", "priority"] {
                    assert!(
                        obj.properties.contains_key(field),
                        "schema should have field '{field}'"
                    );
                }
            }
            _ => panic!("expected Object schema"),
        }
    }
}
