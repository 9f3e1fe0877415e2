//! Operator CLI for storefront catalog administration.
//!
//! `main.rs` parses arguments and dispatches; everything else lives here so
//! the parser, bootstrap and handlers can be tested without the binary.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, NavbarCommand};
pub use error::CliError;
pub use parser::Cli;
