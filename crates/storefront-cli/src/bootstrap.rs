//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together for
//! the CLI: the reqwest catalog client (via storefront-http) is built here
//! and injected into the admin facade (via storefront-admin) as both store
//! ports.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use storefront_admin::{AdminBackend, AdminDeps};
use storefront_core::ImageResolver;
use storefront_http::{ClientConfig, DefaultCategoryClient};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// API base URL; stored image paths resolve against it too.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Config for the given base URL with the client's default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: ClientConfig::new().timeout(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    admin: AdminBackend,
}

impl CliContext {
    /// Access the admin facade.
    pub const fn admin(&self) -> &AdminBackend {
        &self.admin
    }
}

/// Build the CLI context from configuration.
///
/// No request is made here; an unreachable server surfaces on the first
/// command.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let client_config = ClientConfig::new()
        .with_base_url(config.base_url.clone())
        .with_timeout(config.timeout);
    let client = DefaultCategoryClient::new(&client_config)
        .map_err(|e| CliError::Config(format!("cannot build catalog client: {e}")))?;
    let client = Arc::new(client);

    tracing::debug!(base_url = %config.base_url, "catalog client ready");

    let deps = AdminDeps::new(client.clone(), client, ImageResolver::new(config.base_url));
    Ok(CliContext {
        admin: AdminBackend::new(deps),
    })
}
