//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_features` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::net::{Ipv4Addr, SocketAddr};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use url_features::config::DEFAULT_PORT;
use url_features::initialization::init_logger_with;
use url_features::server::{start_server, AppState};
use url_features::{init_extractor, Config, ProcessingStats};

/// Popularity, transport and DNS features for URLs
#[derive(Parser)]
#[command(name = "url_features", version, about)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTML and JSON endpoints
    Serve {
        /// Port to listen on (all interfaces)
        #[arg(long, env = "URL_FEATURES_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Extract the features of one URL and print them as JSON
    Extract {
        /// URL to analyze; `http://` is assumed when no scheme is given
        url: String,
    },
}

async fn run(cli: Cli) -> Result<()> {
    let stats = Arc::new(ProcessingStats::new());
    let extractor =
        init_extractor(&cli.config, stats).context("Failed to initialize extractor")?;

    match cli.command {
        Command::Serve { port } => {
            let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
            start_server(addr, AppState::new(extractor)).await
        }
        Command::Extract { url } => {
            let features = extractor.extract_str(&url).await?;
            println!("{}", serde_json::to_string_pretty(&features)?);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.config.log_level.clone().into(), cli.config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("url_features error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
