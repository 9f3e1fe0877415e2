//! Navbar store port trait.

use async_trait::async_trait;

use super::error::StorePortResult;
use crate::domain::NavbarEntry;

/// Port trait for the navbar entry resource.
///
/// Only creation is exposed; entries are immutable snapshots.
#[async_trait]
pub trait NavbarStorePort: Send + Sync {
    /// Persist a navbar entry.
    async fn create_navbar_entry(&self, entry: &NavbarEntry) -> StorePortResult<()>;
}
