//! Port definitions (trait abstractions) for the external stores.
//!
//! Ports define the interfaces the admin layer expects from infrastructure.
//! They use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP or JSON types in any signature
//! - Stored documents cross the boundary already normalized
//! - One error type for every store failure

mod category_store;
mod error;
mod navbar_store;

pub use category_store::CategoryStorePort;
pub use error::{StorePortError, StorePortResult};
pub use navbar_store::NavbarStorePort;
