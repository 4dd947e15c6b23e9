//! Application startup and lifecycle management.
//!
//! Requests pass through a fixed pipeline, outermost first:
//!
//! ```text
//! request id → trace span → error responder → panic catcher → request decompression
//!     → body decoding (JSON, URL-encoded) → request logger → routes → 404 catch-all
//! ```
//!
//! The error responder wraps everything below it, so any stage can forward a
//! failure to it. Bodies sent with an unsupported `Content-Encoding` are
//! answered 415 by the decompression stage itself. The 404 handler is the
//! router fallback and only runs on misses.

use crate::config::NotificationConfig;
use crate::handlers::{self, health_check, index, route_not_found};
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    decode_body, error_responder, forward_panic, request_id_middleware, request_logger,
    ErrorVerbosity, REQUEST_ID_HEADER,
};
use service_core::utils::process_start;
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::decompression::RequestDecompressionLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: NotificationConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            config,
            started_at: process_start(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Route table. Unknown paths, and known paths with an unregistered method,
/// fall through to [`route_not_found`].
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check).fallback(route_not_found))
        .route("/", get(index).fallback(route_not_found))
        .nest(
            handlers::notification::NOTIFICATION_PREFIX,
            handlers::notification::router(),
        )
        .fallback(route_not_found)
}

/// Wrap a route table in the request pipeline.
pub fn with_pipeline(routes: Router<AppState>, state: AppState) -> Router {
    let verbosity = ErrorVerbosity::for_config(&state.config.common);

    routes
        .layer(from_fn(request_logger))
        .layer(from_fn(decode_body))
        .layer(RequestDecompressionLayer::new())
        .layer(CatchPanicLayer::custom(forward_panic))
        .layer(from_fn_with_state(verbosity, error_responder))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

pub fn build_router(state: AppState) -> Router {
    with_pipeline(routes(), state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: NotificationConfig) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port = port,
            environment = %config.environment(),
            "Server running on port {}",
            port
        );
        tracing::info!("Health check: http://localhost:{}/health", port);
        tracing::info!("Server: http://localhost:{}", port);

        let router = build_router(AppState::new(config));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
