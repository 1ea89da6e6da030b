//! HTTP server for the relay.
//!
//! Three stateless routes: a liveness check, the browser redirect into the
//! provider's authorization page, and the OAuth callback that exchanges the
//! returned code for a token payload. Handlers share an immutable
//! [`AppState`] and coordinate nothing between requests.

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::client::TwitchClient;

/// Shared state for HTTP handlers.
///
/// The client already carries every credential and endpoint the handlers
/// need; nothing else is shared.
#[derive(Debug)]
pub struct AppState {
    /// Provider client for the token exchange.
    pub client: TwitchClient,
}

/// The relay server.
#[derive(Debug)]
pub struct RelayServer {
    state: Arc<AppState>,
}

impl RelayServer {
    /// Create a new relay server.
    #[must_use]
    pub fn new(client: TwitchClient) -> Self {
        Self { state: Arc::new(AppState { client }) }
    }

    /// Run the server on the given port.
    ///
    /// # Errors
    ///
    /// Returns error if the listener cannot bind or the server fails.
    pub async fn run(self, port: u16) -> anyhow::Result<()> {
        let router = create_router(self.state);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Relay listening on http://{}", addr);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("Relay shut down");
        Ok(())
    }
}

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/auth", get(handlers::authorize_redirect))
        .route("/oauth/callback", get(handlers::oauth_callback))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}
