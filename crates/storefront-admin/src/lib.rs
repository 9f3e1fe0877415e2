//! Catalog administration facade for storefront adapters.
//!
//! This crate provides `AdminBackend`, the orchestration layer the operator
//! surfaces (currently the `storefront` CLI) delegate to. It owns the
//! authoritative category list and the per-draft state machines; it never
//! talks HTTP itself.
//!
//! # Architecture
//!
//! ```text
//! Adapters:        storefront-cli
//!                        ↓
//! Facade:         storefront-admin
//!                   AdminBackend
//!                  ↙     ↓      ↘
//!          Manager   Editor   Composer
//!                        ↓
//! Core:           storefront-core ports
//! ```
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - ports are injected via `AdminDeps`
//! 2. **No optimistic updates** - the list only changes through a full relist
//! 3. **Failures become notices** - mutating operations return a `Notice`

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;

mod backend;
mod catalog;
mod deps;
mod editor;
mod error;
mod manager;
mod navbar;
mod notice;
mod phase;
#[cfg(test)]
mod testing;

// Primary exports
pub use backend::AdminBackend;
pub use deps::AdminDeps;
pub use error::AdminError;

pub use catalog::CategoryCatalog;
pub use editor::{CategoryDraft, CategoryEditor, EditorMode, ImagePreview, ImageUploadPolicy};
pub use manager::{CategoryManager, CategoryRow};
pub use navbar::NavbarComposer;
pub use notice::{Notice, NoticeLevel};
pub use phase::DraftPhase;
