//! # Wishlist CLI
//!
//! Loads configuration, sets up logging and the session, builds the client
//! registry from the configured clients, then runs one command against the
//! selected client.

mod cli;
mod commands;
mod output;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wishlist_client::{ClientRegistry, ReqwestTransport, SessionStore, registry};
use wishlist_common::config::LoggingConfig;
use wishlist_view::LocaleDateFormatter;

use crate::cli::Cli;
use crate::commands::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = wishlist_common::config::init().context("failed to load configuration")?;

    // Initialize tracing (structured logging)
    init_tracing(&config.logging);
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        origin = %config.origin,
        "starting wishlist"
    );

    // === Session ===
    // The registry reads the token from here on every request, so a login
    // below is picked up without rebuilding anything.
    let session = Arc::new(match cli.token.clone() {
        Some(token) => SessionStore::with_token(token),
        None => SessionStore::new(),
    });

    // === Client registry ===
    let transport = Arc::new(
        ReqwestTransport::new(&config.origin)
            .with_context(|| format!("invalid origin '{}'", config.origin))?,
    );
    let registry = registry::install(ClientRegistry::build(
        config.clients.clone(),
        session.clone(),
        transport,
    ))?;

    let ctx = AppContext {
        config,
        registry,
        session,
        dates: LocaleDateFormatter::new(config.locale.as_str()),
        format: cli.output,
    };

    commands::authenticate(&ctx, &cli).await?;
    let client = cli.client.clone();
    let rendered = commands::execute(&ctx, &client, cli.command).await?;
    println!("{rendered}");

    Ok(())
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so command
/// output stays pipeable.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
