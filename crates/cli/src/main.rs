//! Storefront Kit CLI - issue API calls from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Fetch a product
//! sk-cli get /products/42
//!
//! # Create an order
//! sk-cli post /orders --data '{"items":[{"productId":"42","quantity":1}]}'
//!
//! # Remove a cart against a different backend
//! sk-cli --base-url https://api.example.com delete /carts/abc
//!
//! # Show the resolved configuration
//! sk-cli info
//! ```
//!
//! # Commands
//!
//! - `get` / `post` / `put` / `delete` - Issue one request and print the
//!   response envelope as JSON; exits with status 1 on failure
//! - `info` - Print application name, version and API base URL

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use storekit_client::{AppConfig, HttpMethod};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "sk-cli")]
#[command(author, version, about = "Storefront Kit API client")]
struct Cli {
    /// Override the API base URL from the environment
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a resource
    Get {
        /// Path appended to the base URL (e.g. /products/42)
        path: String,
    },
    /// Create or mutate a resource
    Post {
        /// Path appended to the base URL
        path: String,

        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Replace a resource
    Put {
        /// Path appended to the base URL
        path: String,

        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Remove a resource
    Delete {
        /// Path appended to the base URL
        path: String,
    },
    /// Show the resolved configuration
    Info,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays valid JSON
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storekit_client=info,sk_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    match cli.command {
        Commands::Get { path } => {
            commands::request::run(&config.api, HttpMethod::Get, &path, None).await?;
        }
        Commands::Post { path, data } => {
            commands::request::run(&config.api, HttpMethod::Post, &path, data.as_deref()).await?;
        }
        Commands::Put { path, data } => {
            commands::request::run(&config.api, HttpMethod::Put, &path, data.as_deref()).await?;
        }
        Commands::Delete { path } => {
            commands::request::run(&config.api, HttpMethod::Delete, &path, None).await?;
        }
        Commands::Info => commands::info::show(&config),
    }
    Ok(())
}
