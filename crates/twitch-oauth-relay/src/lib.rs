//! Twitch OAuth Relay
//!
//! A minimal, stateless HTTP relay for the server-side leg of the Twitch
//! OAuth 2.0 authorization-code flow: redirect the browser to Twitch's
//! authorization page, then exchange the callback code for an access token
//! with a single server-to-server POST and relay the JSON payload verbatim.
//!
//! # Example
//!
//! ```no_run
//! use twitch_oauth_relay::{Config, RelayServer, TwitchClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = TwitchClient::new(config)?;
//!
//!     RelayServer::new(client).run(3000).await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod server;

pub use client::TwitchClient;
pub use config::Config;
pub use error::{ConfigError, ExchangeError};
pub use server::RelayServer;
