//! Pre-flight validation for category and navbar drafts.
//!
//! A draft that fails these checks is never sent to the store.

use thiserror::Error;

/// Minimum category name length, in characters.
pub const NAME_MIN_CHARS: usize = 3;
/// Maximum category name length, in characters.
pub const NAME_MAX_CHARS: usize = 50;

/// Client-detected problems with a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is shorter than [`NAME_MIN_CHARS`] after trimming.
    #[error("Category name must be at least {min} characters (got {len})")]
    NameTooShort { len: usize, min: usize },

    /// Name is longer than [`NAME_MAX_CHARS`] after trimming.
    #[error("Category name must be at most {max} characters (got {len})")]
    NameTooLong { len: usize, max: usize },

    /// A subcategory slot is empty or whitespace.
    #[error("Subcategory #{} is empty", .index + 1)]
    EmptySubcategory { index: usize },

    /// Create requires at least one image.
    #[error("At least one image is required")]
    MissingImage,

    /// More files were selected than the editor accepts.
    #[error("At most {max} image(s) can be uploaded here (got {count})")]
    TooManyImages { count: usize, max: usize },

    /// Navbar submit without a selected category.
    #[error("Select a category first")]
    NoCategorySelected,
}

/// Check the category name length bounds.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if len < NAME_MIN_CHARS {
        return Err(ValidationError::NameTooShort {
            len,
            min: NAME_MIN_CHARS,
        });
    }
    if len > NAME_MAX_CHARS {
        return Err(ValidationError::NameTooLong {
            len,
            max: NAME_MAX_CHARS,
        });
    }
    Ok(())
}

/// Reject the first empty subcategory slot.
pub fn validate_subcategories(subcategories: &[String]) -> Result<(), ValidationError> {
    match subcategories.iter().position(|sub| sub.trim().is_empty()) {
        Some(index) => Err(ValidationError::EmptySubcategory { index }),
        None => Ok(()),
    }
}
