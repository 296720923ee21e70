//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Serve HTTP/1.1 inbound and forward over a pooled HTTP/1.1 client
//! - Wire up middleware (tracing spans with request IDs)
//! - Bind server to listener
//! - Dispatch requests to diagnostics or the upstream
//! - Graceful shutdown

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, Request},
    response::Response,
    routing::any,
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::diagnostics::{self, ListParams};
use crate::http::request::make_span;
use crate::logs::LogStore;
use crate::proxy::{self, Upstream, UpstreamError};
use crate::routing::Route;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub logs: Arc<LogStore>,
    pub upstream: Arc<Upstream>,
    pub client: Client<HttpConnector, Body>,
    pub client_ip_header: HeaderName,
    pub api_limit: usize,
    pub rewrite_host: bool,
    pub echo_events: bool,
}

/// HTTP server for the relay proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
    logs: Arc<LogStore>,
}

impl HttpServer {
    /// Create a server with a fresh event log sized from the configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, UpstreamError> {
        let logs = Arc::new(LogStore::new(config.logs.max_entries));
        Self::with_log_store(config, logs)
    }

    /// Create a server sharing an existing event log.
    pub fn with_log_store(config: ProxyConfig, logs: Arc<LogStore>) -> Result<Self, UpstreamError> {
        let upstream = Arc::new(Upstream::parse(&config.upstream.origin)?);

        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        // Validation rejects bad header names; fall back to the edge default regardless.
        let client_ip_header = HeaderName::from_bytes(config.logs.client_ip_header.as_bytes())
            .unwrap_or_else(|_| HeaderName::from_static("cf-connecting-ip"));

        let state = AppState {
            logs: logs.clone(),
            upstream,
            client,
            client_ip_header,
            api_limit: config.logs.api_limit,
            rewrite_host: config.upstream.rewrite_host,
            echo_events: config.logs.echo,
        };

        let router = Self::build_router(state);
        Ok(Self {
            router,
            config,
            logs,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", any(dispatch))
            .route("/{*path}", any(dispatch))
            .with_state(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http().make_span_with(make_span)))
    }

    /// The fully layered router, for serving or driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The event log shared with the handlers.
    pub fn log_store(&self) -> Arc<LogStore> {
        self.logs.clone()
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.origin,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Dispatch handler: diagnostics first, everything else upstream.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    match Route::resolve(request.method(), request.uri().path()) {
        Route::LogPage => diagnostics::log_page(),
        Route::LogApi => {
            let params = ListParams::from_uri(request.uri());
            diagnostics::list_logs(&state.logs, &params, state.api_limit)
        }
        Route::LogClear => diagnostics::clear_logs(&state.logs),
        Route::Health => diagnostics::health(&state.logs),
        Route::Upstream => proxy::forward(&state, request).await,
    }
}
