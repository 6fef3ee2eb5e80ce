//! redesign-gateway - room redesign and shopping-list service

#![allow(missing_docs)]

use clap::Parser;
use redesign_gateway::{Config, build_info, server, utils};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "Room redesign and shopping-list gateway")]
struct Args {
    /// Configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

async fn run(args: Args) -> redesign_gateway::Result<()> {
    let mut config = Config::load(&args.config).await?;
    if let Some(host) = args.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }

    utils::init_logging(&config.gateway.logging)?;

    let build = build_info();
    info!(
        version = build.version,
        git_hash = build.git_hash,
        "Starting redesign gateway"
    );

    server::run_server(config).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
