//! HTTP server setup.
//!
//! # Responsibilities
//! - Mount the path resolver as the Axum router's fallback service
//! - Wire up request tracing
//! - Bind server to listener with graceful shutdown

use std::convert::Infallible;
use std::future::Future;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tower::Service;
use tower_http::trace::TraceLayer;

use crate::routing::PathResolver;

/// HTTP front end serving a [`PathResolver`].
pub struct RedirectServer {
    router: Router,
}

impl RedirectServer {
    /// Build the Axum router around `resolver`.
    ///
    /// The resolver is the only service mounted: every path reaches it.
    pub fn new<F>(resolver: PathResolver<F>) -> Self
    where
        F: Service<Request<Body>, Error = Infallible> + Clone + Send + Sync + 'static,
        F::Response: IntoResponse,
        F::Future: Send + 'static,
    {
        let router = Router::new()
            .fallback_service(resolver)
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// The assembled router, for embedding or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve connections from `listener` until `shutdown` completes.
    pub async fn run<S>(self, listener: TcpListener, shutdown: S) -> Result<(), std::io::Error>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Fallback used by the binary: `404 Not Found` naming the path.
pub async fn not_found(request: Request<Body>) -> Response {
    let path = request.uri().path();
    tracing::debug!(path = %path, "No redirect configured");
    (StatusCode::NOT_FOUND, format!("No redirect configured for {path}\n")).into_response()
}

/// Wait for shutdown signal (Ctrl+C).
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C, shutting down");
        return;
    }
    tracing::info!("Shutdown signal received");
}
