//! Domain types for the catalog.
//!
//! These types represent categories and navbar entries independent of the
//! transport used to persist them.

mod category;
mod image;
mod navbar;

pub use category::{
    Category, CategoryId, CategoryRecord, CategoryUpdate, MalformedRecord, NewCategory,
};
pub use image::{DEFAULT_PLACEHOLDER_IMAGE, ImageFile, ImageRef, ImageResolver};
pub use navbar::NavbarEntry;
