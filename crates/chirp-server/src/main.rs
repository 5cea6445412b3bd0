use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use chirp_server::{ChirpServer, ServerConfig};

/// Chirp micro-blogging server.
#[derive(Debug, Parser)]
#[command(name = "chirpd", version)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind address.
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    ChirpServer::new(config).serve().await?;
    Ok(())
}
