//! Create command handler.

use std::path::PathBuf;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::{fill_subcategories, finish};
use crate::presentation::display_category;
use crate::utils::files::load_images;

/// Execute the create command.
///
/// Every image is read before anything is sent; the category list is
/// refetched after a successful create.
pub async fn execute(
    ctx: &CliContext,
    name: &str,
    subcategories: &[String],
    images: &[PathBuf],
) -> Result<()> {
    let files = load_images(images).await?;

    let mut manager = ctx.admin().category_manager();
    let editor = manager.open_create();
    editor.set_name(name).map_err(CliError::from)?;
    fill_subcategories(&editor, subcategories)?;
    editor.select_images(files).map_err(CliError::from)?;

    let notice = editor.submit().await;
    if let Some(created) = manager.close_editor(editor) {
        display_category(&created, ctx.admin().images());
        println!();
    }
    finish(&notice)
}
