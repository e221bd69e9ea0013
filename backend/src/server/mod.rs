//! Server construction and middleware wiring.

use std::net::SocketAddr;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use tracing::info;

use people_api::Trace;
use people_api::api::health::{HealthState, live, ready};
use people_api::api::{self, AppState};
use people_api::config::ServerSettings;
#[cfg(debug_assertions)]
use people_api::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Failures that stop the process before it serves traffic.
#[derive(Debug, thiserror::Error)]
pub enum ServerStartError {
    #[error("failed to load configuration: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to configure Prometheus metrics: {0}")]
    Metrics(String),
    #[error("server terminated with an error: {0}")]
    Runtime(#[from] std::io::Error),
}

fn build_app(
    health_state: web::Data<HealthState>,
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(app_state)
        .wrap(Trace)
        .configure(api::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Result<PrometheusMetrics, ServerStartError> {
    PrometheusMetricsBuilder::new("people_api")
        .endpoint("/metrics")
        .build()
        .map_err(|err| ServerStartError::Metrics(err.to_string()))
}

/// Construct the HTTP server from loaded settings.
///
/// The returned [`Server`] must be awaited to drive the listener. Readiness is
/// flagged once the socket is bound.
///
/// # Errors
/// Returns [`ServerStartError`] when metrics registration or binding fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> Result<Server, ServerStartError> {
    let bind_addr = settings.bind_addr();
    let app_state = web::Data::new(settings.app_state());
    let server_health_state = health_state.clone();
    #[cfg(feature = "metrics")]
    let prometheus = make_metrics()?;

    info!(
        %bind_addr,
        max_upload_bytes = app_state.max_upload_bytes,
        credentials = ?app_state.credentials,
        "starting HTTP server"
    );

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), app_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)
    .map_err(|source| ServerStartError::Bind {
        addr: bind_addr,
        source,
    })?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn app_serves_routes_and_probes() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let app = test::init_service(build_app(
            health,
            web::Data::new(AppState::default()),
        ))
        .await;

        for uri in ["/", "/person/detail/3", "/health/ready", "/health/live"] {
            let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
            assert!(res.headers().contains_key("trace-id"), "{uri}");
        }
    }
}
