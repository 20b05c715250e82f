//! RAG gateway binary
//!
//! Loads configuration, installs logging and serves `/rag` until stopped.

use clap::Parser;
use rag_gateway::config::DEFAULT_CONFIG_PATH;
use rag_gateway::utils::logging::init_logging;
use rag_gateway::{Config, GatewayError, run_server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "gateway", version)]
#[command(about = "Answer questions through an LLM and render them as HTML")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "RAG_GATEWAY_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Address to bind, overrides server.host
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides server.port
    #[arg(short, long)]
    port: Option<u16>,
}

/// File, then environment, then command line
async fn load_config(args: &Args) -> (Result<Config, GatewayError>, Option<GatewayError>) {
    let (mut config, file_error) = match Config::from_file(&args.config).await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = config.apply_env_overrides() {
        return (Err(e), file_error);
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let validated = config.validate().map(|()| config);
    (validated, file_error)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let (config, file_error) = load_config(&args).await;
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Some(e) = file_error {
        warn!(
            "Configuration file {} not loaded, using defaults: {}",
            args.config.display(),
            e
        );
    } else {
        info!("Configuration loaded from {}", args.config.display());
    }

    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
