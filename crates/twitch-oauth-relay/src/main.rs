//! Twitch OAuth Relay - Entry Point
//!
//! Loads configuration from the environment, then serves the three relay
//! routes. A missing credential aborts startup before any listener binds.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use twitch_oauth_relay::{Config, RelayServer, TwitchClient, config::api};

#[derive(Parser, Debug)]
#[command(name = "twitch-oauth-relay")]
#[command(about = "Stateless relay for the Twitch OAuth authorization-code flow")]
#[command(version)]
struct Cli {
    /// HTTP server port
    #[arg(long, default_value_t = api::DEFAULT_PORT, env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Twitch OAuth relay");

    // Required credentials are validated here, before the listener binds.
    let config = Config::from_env()?;
    let client = TwitchClient::new(config)?;

    RelayServer::new(client).run(cli.port).await
}
