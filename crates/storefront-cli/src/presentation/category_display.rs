//! Category and notice display for CLI output.

use storefront_admin::{CategoryRow, Notice};
use storefront_core::{Category, ImageResolver};

/// Print a notice: successes to stdout, errors to stderr.
pub fn print_notice(notice: &Notice) {
    if notice.is_error() {
        eprintln!("{notice}");
    } else {
        println!("{notice}");
    }
}

/// Print every field of one category.
pub fn display_category(category: &Category, images: &ImageResolver) {
    println!("ID:            {}", category.id);
    println!("Name:          {}", category.name);
    if category.subcategories.is_empty() {
        println!("Subcategories: No Subcategories");
    } else {
        println!("Subcategories:");
        for (i, sub) in category.subcategories.iter().enumerate() {
            println!("  {}. {sub}", i + 1);
        }
    }
    println!("Thumbnail:     {}", images.thumbnail(&category.images));
    if category.images.len() > 1 {
        println!("Images:");
        for image in &category.images {
            println!("  {}", images.resolve(image));
        }
    }
}

/// Format one table row.
pub fn format_row(row: &CategoryRow) -> String {
    use crate::presentation::truncate_string;

    let id = row.id.as_ref().map_or("--", |id| id.as_str());
    format!(
        "{:<26} {:<24} {:<40} {}",
        truncate_string(id, 25),
        truncate_string(&row.display_name, 23),
        truncate_string(&row.subcategories, 39),
        row.thumbnail_url
    )
}
