//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod category_display;
pub mod tables;

// Re-export commonly used items
pub use category_display::{display_category, format_row, print_notice};
pub use tables::{print_separator, truncate_string};
