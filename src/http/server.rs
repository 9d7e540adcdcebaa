//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router for the employee REST surface
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Build the upstream client and service from configuration
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::FacadeConfig;
use crate::employee::EmployeeService;
use crate::http::handlers;
use crate::http::request::{request_id, MakeRequestUuid};
use crate::lifecycle::shutdown;
use crate::upstream::{HttpEmployeeClient, UpstreamResult};

/// Collection path of the REST surface.
pub const EMPLOYEE_PATH: &str = "/api/v1/employee";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EmployeeService<HttpEmployeeClient>>,
}

/// HTTP server for the employee facade.
pub struct HttpServer {
    router: Router,
    config: FacadeConfig,
}

impl HttpServer {
    /// Create a server; fails only if the upstream client cannot be built.
    pub fn new(config: FacadeConfig) -> UpstreamResult<Self> {
        let client = HttpEmployeeClient::new(&config.upstream)?;
        let state = AppState {
            service: Arc::new(EmployeeService::new(client)),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &FacadeConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                EMPLOYEE_PATH,
                get(handlers::list_all).post(handlers::create),
            )
            .route(
                &format!("{EMPLOYEE_PATH}/search/{{name}}"),
                get(handlers::search),
            )
            .route(
                &format!("{EMPLOYEE_PATH}/highest-salary"),
                get(handlers::highest_salary),
            )
            .route(
                &format!("{EMPLOYEE_PATH}/top-ten-highest-earners"),
                get(handlers::top_ten_names),
            )
            .route(
                &format!("{EMPLOYEE_PATH}/{{id}}"),
                get(handlers::get_by_id).delete(handlers::delete_by_id),
            )
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id(request.headers()),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until `shutdown_rx` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }
}
