//! Core domain types and port definitions for storefront catalog administration.
//!
//! This crate owns the shape of a category, the navbar snapshot derived from
//! it, the pre-flight validation rules, and the port traits through which the
//! admin layer talks to the category and navbar stores. It contains no HTTP
//! code; the reqwest adapter lives in `storefront-http`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod search;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    Category, CategoryId, CategoryRecord, CategoryUpdate, DEFAULT_PLACEHOLDER_IMAGE, ImageFile,
    ImageRef, ImageResolver, MalformedRecord, NavbarEntry, NewCategory,
};
pub use ports::{CategoryStorePort, NavbarStorePort, StorePortError, StorePortResult};
pub use search::{filter_records, matches_search};
pub use validation::{NAME_MAX_CHARS, NAME_MIN_CHARS, ValidationError};
