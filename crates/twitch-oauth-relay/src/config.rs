//! Configuration for the Twitch OAuth relay.

use std::time::Duration;

use crate::error::ConfigError;

/// Provider endpoint constants.
pub mod api {
    use std::time::Duration;

    /// Twitch authorization endpoint (browser-facing).
    pub const AUTHORIZE_URL: &str = "https://id.twitch.tv/oauth2/authorize";

    /// Twitch token endpoint (server-to-server).
    pub const TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

    /// Fixed permission scope requested during authorization.
    pub const SCOPE: &str = "user:read:email";

    /// Default listening port when `PORT` is unset.
    pub const DEFAULT_PORT: u16 = 3000;

    /// Request timeout for the token exchange.
    ///
    /// The upstream contract configures no timeout; this is a documented
    /// hardening default so a hung provider cannot pin a request forever.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Relay configuration.
///
/// Built once at process start from the environment and passed explicitly
/// into the client and server; handlers never read ambient state.
#[derive(Clone)]
pub struct Config {
    /// Provider-issued client identifier.
    pub client_id: String,

    /// Provider-issued client secret. Never logged or echoed to a client.
    pub client_secret: String,

    /// Absolute callback URL registered with the provider.
    pub redirect_uri: String,

    /// Authorization endpoint (overridable for mock servers in tests).
    pub authorize_url: String,

    /// Token endpoint (overridable for mock servers in tests).
    pub token_url: String,

    /// Request timeout for the token exchange.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration from explicit credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if any value is empty.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        let redirect_uri = redirect_uri.into();

        if client_id.is_empty() {
            return Err(ConfigError::missing("CLIENT_ID"));
        }
        if client_secret.is_empty() {
            return Err(ConfigError::missing("CLIENT_SECRET"));
        }
        if redirect_uri.is_empty() {
            return Err(ConfigError::missing("REDIRECT_URI"));
        }

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            authorize_url: api::AUTHORIZE_URL.to_string(),
            token_url: api::TOKEN_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        })
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `CLIENT_ID`, `CLIENT_SECRET`, and `REDIRECT_URI`. All three are
    /// required; a missing or empty value is a fatal startup error surfaced
    /// before any listener binds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the absent variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Build from a variable lookup. An absent variable is treated the same
    /// as an empty one: fatal, naming the variable. Factored out so the
    /// lookup can be substituted in tests without mutating process state.
    fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::new(
            lookup("CLIENT_ID").unwrap_or_default(),
            lookup("CLIENT_SECRET").unwrap_or_default(),
            lookup("REDIRECT_URI").unwrap_or_default(),
        )
    }

    /// Create a test configuration pointing both provider endpoints at a
    /// mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
            redirect_uri: "http://localhost:3000/oauth/callback".to_string(),
            authorize_url: format!("{}/oauth2/authorize", base_url),
            token_url: format!("{}/oauth2/token", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

// Manual Debug keeps the secret out of logs and panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("authorize_url", &self.authorize_url)
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_valid() {
        let config = Config::new("id", "secret", "https://app.example/cb").unwrap();
        assert_eq!(config.client_id, "id");
        assert_eq!(config.token_url, api::TOKEN_URL);
        assert_eq!(config.authorize_url, api::AUTHORIZE_URL);
    }

    #[test]
    fn test_config_rejects_empty_client_id() {
        let err = Config::new("", "secret", "https://app.example/cb").unwrap_err();
        assert!(err.to_string().contains("CLIENT_ID"));
    }

    #[test]
    fn test_config_rejects_empty_secret() {
        let err = Config::new("id", "", "https://app.example/cb").unwrap_err();
        assert!(err.to_string().contains("CLIENT_SECRET"));
    }

    #[test]
    fn test_config_rejects_empty_redirect_uri() {
        let err = Config::new("id", "secret", "").unwrap_err();
        assert!(err.to_string().contains("REDIRECT_URI"));
    }

    #[test]
    fn test_config_debug_hides_secret() {
        let config = Config::new("id", "super-secret", "https://app.example/cb").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name| vars.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_from_env_with_all_variables_present() {
        let config = Config::from_env_with(env_of(&[
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("REDIRECT_URI", "https://app.example/cb"),
        ]))
        .unwrap();
        assert_eq!(config.client_id, "id");
        assert_eq!(config.redirect_uri, "https://app.example/cb");
    }

    #[test]
    fn test_from_env_with_absent_variable_names_it() {
        let err = Config::from_env_with(env_of(&[
            ("CLIENT_ID", "id"),
            ("REDIRECT_URI", "https://app.example/cb"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("CLIENT_SECRET"));
    }

    #[test]
    fn test_from_env_with_no_variables_fails_on_client_id_first() {
        let err = Config::from_env_with(env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("CLIENT_ID"));
    }

    #[test]
    fn test_from_env_with_empty_value_treated_as_absent() {
        let err = Config::from_env_with(env_of(&[
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("REDIRECT_URI", ""),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("REDIRECT_URI"));
    }

    #[test]
    fn test_for_testing_points_at_mock() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.token_url, "http://127.0.0.1:9999/oauth2/token");
        assert_eq!(config.authorize_url, "http://127.0.0.1:9999/oauth2/authorize");
    }
}
