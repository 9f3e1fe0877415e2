//! Navbar command handlers.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::finish;

/// Execute `navbar add`.
///
/// The entry copies the named category's subcategories as they are now.
pub async fn add(ctx: &CliContext, category: &str) -> Result<()> {
    let composer = ctx.admin().navbar_composer();
    if let Some(notice) = composer.open().await {
        return Err(CliError::from(&notice).into());
    }

    if !composer.options().await.iter().any(|name| name == category) {
        tracing::warn!(category, "no category with this name; entry will have no subcategories");
    }
    composer.select(category).await.map_err(CliError::from)?;

    let draft = composer.draft();
    println!("Category:      {}", draft.categories);
    println!("Subcategories: {}", draft.subcategories.join(", "));
    println!();

    let notice = composer.submit().await;
    finish(&notice)
}
