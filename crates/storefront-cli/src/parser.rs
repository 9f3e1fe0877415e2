//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Default API base URL when neither the flag nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

/// Command-line interface for storefront catalog administration.
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Manage storefront categories and navbar entries")]
#[command(version)]
pub struct Cli {
    /// Base URL of the storefront API
    #[arg(
        long = "base-url",
        env = "STOREFRONT_API_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
