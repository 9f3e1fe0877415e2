//! REST client for the storefront catalog API.
//!
//! Implements the `storefront-core` store ports over HTTP:
//!
//! - `GET    api/categories`       list categories
//! - `POST   api/categories`       create (multipart)
//! - `PUT    api/categories/:id`   update (multipart)
//! - `DELETE api/categories/:id`   delete
//! - `POST   api/admin/navheaders` create a navbar entry (JSON)
//!
//! The base URL is injected through [`ClientConfig`]; nothing in this crate
//! reads the process environment.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultCategoryClient is meant to be used
// through the store port traits, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod form;
mod http;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCategoryClient;

// Configuration
pub use config::ClientConfig;

// Errors surfaced by construction
pub use error::HttpError;
