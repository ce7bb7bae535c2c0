//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use users_api::Trace;
use users_api::doc::swagger_ui;
use users_api::middleware::cors;
use users_api::inbound::http::{HttpState, users_scope};

pub(crate) fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .wrap(cors())
        .wrap(Trace)
        .service(users_scope())
        .service(swagger_ui())
}

/// Construct an Actix HTTP server from the given configuration.
///
/// Every worker shares the one store carried by `config`, so users created
/// through any worker are visible to all of them.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, users } = config;
    let http_state = web::Data::new(HttpState::new(users));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}
