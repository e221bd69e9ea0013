//! Service entry-point: loads settings, initialises tracing and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use people_api::api::health::HealthState;
use people_api::config::ServerSettings;
use server::{ServerStartError, create_server};

#[actix_web::main]
async fn main() -> Result<(), ServerStartError> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let result = run().await;
    if let Err(err) = &result {
        error!(error = %err, "server stopped");
    }
    result
}

async fn run() -> Result<(), ServerStartError> {
    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| ServerStartError::Config(err.to_string()))?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings)?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    Ok(outcome?)
}
