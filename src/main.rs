//! strand: serve one of the sample protocols over TCP
//!
//! - ROT13 (default, port 1618)
//! - Echo
//! - Ping/PONG
//!
//! Configuration via CLI arguments or TOML file.

use strand::config::Config;
use strand::{protocols, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(
        host = %config.host,
        port = config.port,
        protocol = ?config.protocol,
        backlog = config.backlog,
        max_connections = config.max_connections,
        "Starting strand server"
    );

    let mut server = Server::bind(&config, protocols::factory(config.protocol))?;
    server.run()?;
    Ok(())
}
