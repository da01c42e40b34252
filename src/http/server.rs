//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all five reflection routes
//! - Wire up middleware (tracing)
//! - Serve connections from a caller-provided listener
//!
//! # Design Decisions
//! - The route table is built once at construction and is immutable after;
//!   there is no global registration anywhere
//! - A registered path hit with the wrong method answers 405 with an empty
//!   body (Axum's method-router default); unknown paths fall through to the
//!   framework's 404
//! - Serve-loop errors propagate to the caller; the binary treats them as
//!   fatal rather than attempting recovery

use std::net::SocketAddr;

use axum::routing::{delete, get};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::schema::ServerConfig;
use crate::http::handlers;

/// HTTP server for the request mirror.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router();
        Self { router, config }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router() -> Router {
        Router::new()
            .route("/ip", get(handlers::ip))
            .route("/headers", get(handlers::headers))
            .route("/user-agent", get(handlers::user_agent))
            .route("/delete", delete(handlers::delete))
            .route("/players/{player}", get(handlers::players))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        // ConnectInfo carries the peer address into the handlers.
        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
