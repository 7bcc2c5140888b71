//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Own the project store for the lifetime of the process
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::ServiceConfig;
use crate::http::handlers::{
    create_project, delete_project, get_project, health, list_projects, route_not_found,
    update_project,
};
use crate::http::request::{request_id, x_request_id, UuidRequestId};
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;
use crate::projects::ProjectStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProjectStore>,
}

/// HTTP server for the project service.
pub struct HttpServer {
    router: Router,
    store: Arc<ProjectStore>,
}

impl HttpServer {
    /// Create a new HTTP server with an empty project store.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, Arc::new(ProjectStore::new()))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<ProjectStore>) -> Self {
        let state = AppState {
            store: store.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router, store }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(health))
            .route("/projects", get(list_projects).post(create_project))
            .route(
                "/projects/{project_id}",
                get(get_project).put(update_project).delete(delete_project),
            )
            .route_layer(middleware::from_fn(metrics::track_requests))
            .fallback(route_not_found)
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(x_request_id()))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(SetRequestIdLayer::new(x_request_id(), UuidRequestId))
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { shutdown.recv().await })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle to the project store.
    pub fn store(&self) -> Arc<ProjectStore> {
        self.store.clone()
    }
}

fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id(request).unwrap_or("unknown"),
    )
}
