//! Twitch identity-provider client.
//!
//! Provides the async HTTP client for the server-to-server leg of the
//! authorization-code flow. One outbound POST per inbound callback, no
//! retries: a failed exchange is terminal for that request and the user
//! restarts the flow from `/auth`.

use reqwest::Client;
use url::Url;

use crate::config::{Config, api};
use crate::error::ExchangeResult;

/// Client for the Twitch OAuth endpoints.
#[derive(Clone)]
pub struct TwitchClient {
    /// Pooled HTTP client.
    client: Client,

    /// Authorization endpoint, parsed once at construction.
    authorize_url: Url,

    /// Token endpoint.
    token_url: String,

    /// Provider-issued client identifier.
    client_id: String,

    /// Provider-issued client secret.
    client_secret: String,

    /// Registered callback URL.
    redirect_uri: String,
}

impl TwitchClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails or the configured
    /// authorization endpoint is not a valid URL.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let authorize_url = Url::parse(&config.authorize_url)?;

        Ok(Self {
            client,
            authorize_url,
            token_url: config.token_url,
            client_id: config.client_id,
            client_secret: config.client_secret,
            redirect_uri: config.redirect_uri,
        })
    }

    /// Build the provider authorization URL for the browser redirect.
    ///
    /// Carries exactly four query parameters: the client identifier, the
    /// percent-encoded redirect URI, `response_type=code`, and the fixed
    /// permission scope.
    #[must_use]
    pub fn authorize_url(&self) -> Url {
        let mut url = self.authorize_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", api::SCOPE);
        url
    }

    /// Exchange an authorization code for a token payload.
    ///
    /// Issues a single POST with a URL-encoded form body of exactly five
    /// fields, then parses the response body as JSON and returns it verbatim.
    /// The payload is opaque to the relay: a provider-reported error object
    /// is passed through unchanged, matching the provider's own contract with
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, or a non-JSON response
    /// body.
    pub async fn exchange_code(&self, code: &str) -> ExchangeResult<serde_json::Value> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let response = self.client.post(&self.token_url).form(&form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, "Token endpoint responded");

        Ok(serde_json::from_str(&body)?)
    }
}

// Manual Debug keeps the secret out of logs.
impl std::fmt::Debug for TwitchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitchClient")
            .field("client_id", &self.client_id)
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}
