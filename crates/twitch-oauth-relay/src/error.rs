//! Error types for the Twitch OAuth relay.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Every error is handled at the boundary of the request
//! that raised it; none carry the client secret in their display output.

/// Fatal configuration errors raised before the server binds a listener.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("missing required configuration: {name}")]
    Missing {
        /// Name of the missing environment variable.
        name: &'static str,
    },
}

impl ConfigError {
    /// Create a missing-variable error.
    #[must_use]
    pub const fn missing(name: &'static str) -> Self {
        Self::Missing { name }
    }
}

/// Errors from the token exchange with the provider.
///
/// The exchange is a single attempt; there is no retry taxonomy. Network
/// failure, timeout, and a non-JSON response body all collapse to a 500 at
/// the handler boundary, with the cause logged server-side.
#[derive(thiserror::Error, Debug)]
pub enum ExchangeError {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider response body was not valid JSON.
    #[error("failed to parse token response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for token-exchange operations.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_names_variable() {
        let err = ConfigError::missing("CLIENT_SECRET");
        assert_eq!(err.to_string(), "missing required configuration: CLIENT_SECRET");
    }

    #[test]
    fn test_exchange_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ExchangeError::from(json_err);
        assert!(err.to_string().contains("parse"));
    }
}
