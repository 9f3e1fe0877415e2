//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_row, print_separator};

/// Execute the list command.
///
/// Fetches the category list and prints the rows matching `search`.
pub async fn execute(ctx: &CliContext, search: Option<&str>) -> Result<()> {
    let mut manager = ctx.admin().category_manager();
    if let Some(notice) = manager.load().await {
        return Err(CliError::from(&notice).into());
    }
    if let Some(term) = search {
        manager.set_search(term);
    }

    let rows = manager.rows().await;
    if rows.is_empty() {
        match search {
            Some(term) => println!("No categories match '{term}'."),
            None => {
                println!("No categories found.");
                println!("Use 'storefront create --name <NAME> --image <FILE>' to add one.");
            }
        }
        return Ok(());
    }

    println!("Found {} category(ies):\n", rows.len());
    println!(
        "{:<26} {:<24} {:<40} Thumbnail",
        "ID", "Name", "Subcategories"
    );
    print_separator(120);
    for row in &rows {
        println!("{}", format_row(row));
    }

    Ok(())
}
