//! Navbar entry: a snapshot of one category's name and subcategories.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Navigation-bar definition derived from a category.
///
/// This is a copy, not a reference. Renaming the source category or editing
/// its subcategories later does not change entries that already exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarEntry {
    /// Name of the category the entry was taken from.
    pub categories: String,
    /// Subcategories of that category at snapshot time, in order.
    pub subcategories: Vec<String>,
}

impl NavbarEntry {
    /// Copy the name and subcategories of a category.
    pub fn snapshot(category: &Category) -> Self {
        Self {
            categories: category.name.clone(),
            subcategories: category.subcategories.clone(),
        }
    }

    /// Whether no category has been chosen yet.
    pub fn is_unselected(&self) -> bool {
        self.categories.is_empty()
    }
}
