//! Route handlers for the relay.
//!
//! Per-request flow through the callback: `AwaitingCode` on entry, then
//! either a 400 (no code), a 200 with the provider's JSON payload relayed
//! verbatim, or a 500 (exchange failed). Nothing persists across requests.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;

/// `GET /`
///
/// Liveness check.
pub async fn health_check() -> &'static str {
    "Twitch OAuth relay is running."
}

/// `GET /auth`
///
/// Redirect the browser to the provider's authorization page. The URL
/// carries no secret, so logging it is safe.
pub async fn authorize_redirect(State(state): State<Arc<AppState>>) -> Response {
    let url = state.client.authorize_url();

    tracing::info!(url = %url, "Redirecting to Twitch authorization URL");

    (StatusCode::FOUND, [(header::LOCATION, url.to_string())]).into_response()
}

/// Query parameters for the OAuth callback.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    /// Single-use authorization code issued by the provider.
    pub code: Option<String>,
}

/// `GET /oauth/callback`
///
/// Exchange the authorization code for a token payload and relay the
/// provider's JSON verbatim. A missing code is a 400 with no outbound
/// request; a failed exchange is a 500 with the cause logged server-side.
/// No retry: the user restarts the flow from `/auth`.
pub async fn oauth_callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let Some(code) = query.code.as_deref().filter(|c| !c.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "No code provided").into_response();
    };

    tracing::info!("Received authorization code");

    match state.client.exchange_code(code).await {
        Ok(token_data) => Json(token_data).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Token exchange failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Token exchange failed").into_response()
        }
    }
}
