//! Update command handler.

use std::path::PathBuf;

use anyhow::Result;
use storefront_core::CategoryId;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::{fill_subcategories, finish};
use crate::presentation::display_category;
use crate::utils::files::load_image;

/// Execute the update command.
///
/// Fields that are not given keep their stored values. Without `image` no
/// file is uploaded and the stored images stay.
pub async fn execute(
    ctx: &CliContext,
    id: &str,
    name: Option<&str>,
    subcategories: &[String],
    image: Option<&PathBuf>,
) -> Result<()> {
    let file = match image {
        Some(path) => Some(load_image(path).await?),
        None => None,
    };

    let mut manager = ctx.admin().category_manager();
    if let Some(notice) = manager.load().await {
        return Err(CliError::from(&notice).into());
    }

    let editor = manager
        .open_update(&CategoryId::new(id))
        .await
        .map_err(CliError::from)?;
    if let Some(name) = name {
        editor.set_name(name).map_err(CliError::from)?;
    }
    if !subcategories.is_empty() {
        fill_subcategories(&editor, subcategories)?;
    }
    if let Some(file) = file {
        editor.select_images(vec![file]).map_err(CliError::from)?;
    }

    let notice = editor.submit().await;
    if let Some(updated) = manager.close_editor(editor) {
        display_category(&updated, ctx.admin().images());
        println!();
    }
    finish(&notice)
}
