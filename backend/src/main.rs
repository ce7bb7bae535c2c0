//! Users API entry-point: loads settings, wires REST endpoints and OpenAPI docs.

mod server;

use std::env;

use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use users_api::doc::OPENAPI_JSON_PATH;
use users_api::settings::ServerSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(env::args_os()).map_err(|e| {
        error!(error = %e, "failed to load server settings");
        std::io::Error::other(format!("failed to load server settings: {e}"))
    })?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        error!(error = %e, "invalid bind address");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let server = create_server(ServerConfig::new(bind_addr)).inspect_err(|e| {
        error!(error = %e, %bind_addr, "failed to bind listener");
    })?;
    info!(
        %bind_addr,
        docs = "/docs/",
        openapi = OPENAPI_JSON_PATH,
        "users api listening"
    );
    server.await
}
