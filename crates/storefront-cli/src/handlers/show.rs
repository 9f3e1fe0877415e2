//! Show command handler.

use anyhow::Result;
use storefront_core::CategoryId;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_category;

/// Execute the show command.
pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    let mut manager = ctx.admin().category_manager();
    if let Some(notice) = manager.load().await {
        return Err(CliError::from(&notice).into());
    }

    let id = CategoryId::new(id);
    let Some(category) = ctx.admin().catalog().find(&id).await else {
        println!("No category found with id: '{id}'");
        println!("Use 'storefront list' to see available categories.");
        return Ok(());
    };

    display_category(&category, ctx.admin().images());
    Ok(())
}
