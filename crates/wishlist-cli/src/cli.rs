//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;
use wishlist_common::config::FALLBACK_CLIENT;

#[derive(Debug, Parser)]
#[command(
    name = "wishlist",
    version,
    about = "Browse wishlists through the configured backend clients"
)]
pub struct Cli {
    /// Named client to send requests through.
    #[arg(long, global = true, default_value = FALLBACK_CLIENT)]
    pub client: String,

    /// Bearer token of an existing session.
    #[arg(long, global = true, env = "WISHLIST_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Log in with this username before running the command.
    #[arg(long, global = true)]
    pub username: Option<String>,

    #[arg(long, global = true, env = "WISHLIST_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the configured client names.
    Clients,
    /// Print the resolved configuration as TOML.
    Config,
    /// List the operations published by the client's schema.
    Schema,
    /// Show the signed-in user.
    Me,
    /// List wishlists, your own or another user's.
    Wishlists {
        #[arg(long)]
        user: Option<String>,
    },
    /// Show one wishlist with its items.
    Wishlist { uuid: Uuid },
}
