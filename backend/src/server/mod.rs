//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::{DatabaseSettings, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use contact_backend::Trace;
#[cfg(debug_assertions)]
use contact_backend::doc::ApiDoc;
use contact_backend::domain::ContactSubmissionService;
use contact_backend::domain::ports::ContactSubmissionCommand;
use contact_backend::inbound::http::contact::contact_resource;
use contact_backend::inbound::http::health::{HealthState, live, ready};
use contact_backend::inbound::http::state::HttpState;
use contact_backend::outbound::persistence::{DbPool, DieselContactRepository};

/// Build the contact use-case backed by PostgreSQL.
fn build_contact_command(pool: &DbPool) -> Arc<dyn ContactSubmissionCommand> {
    Arc::new(ContactSubmissionService::new(
        Arc::new(DieselContactRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    ))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1").service(contact_resource());

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server and mark the service ready once bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::new(build_contact_command(&config.db_pool)));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "contact backend listening");
    health_state.mark_ready();
    Ok(server)
}
