//! Shared fixtures for storefront-admin integration tests.

// Each test binary uses a different subset.
#![allow(dead_code)]

pub mod store;

use std::sync::Arc;

use storefront_admin::{AdminBackend, AdminDeps};
use storefront_core::{ImageFile, ImageResolver};

use self::store::MemoryStore;

/// Base URL the resolver is built with in every test.
pub const TEST_BASE_URL: &str = "http://localhost:5000/";

/// A backend wired to one in-memory store for both ports.
pub fn backend(store: &Arc<MemoryStore>) -> AdminBackend {
    AdminBackend::new(AdminDeps::new(
        store.clone(),
        store.clone(),
        ImageResolver::new(TEST_BASE_URL),
    ))
}

pub fn image(name: &str) -> ImageFile {
    ImageFile::from_bytes(name, vec![0xFF_u8, 0xD8, 0xFF])
}
