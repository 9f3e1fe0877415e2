//! Command handlers that delegate to the admin facade.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that read CLI input, drive a manager, editor or composer,
//!   and print the resulting notice
//! - An error notice becomes a `CliError::Operation` so the exit code is
//!   non-zero

pub mod create;
pub mod delete;
pub mod list;
pub mod navbar;
pub mod show;
pub mod update;

use anyhow::Result;
use storefront_admin::{CategoryEditor, Notice};

use crate::error::CliError;
use crate::presentation::print_notice;

/// Print a success notice, or turn an error notice into the command's error.
fn finish(notice: &Notice) -> Result<()> {
    if notice.is_error() {
        return Err(CliError::from(notice).into());
    }
    print_notice(notice);
    Ok(())
}

/// Replace the editor's subcategory slots with `values`, in order.
fn fill_subcategories(editor: &CategoryEditor, values: &[String]) -> Result<(), CliError> {
    while !editor.draft().subcategories.is_empty() {
        editor.remove_subcategory(0)?;
    }
    for (i, value) in values.iter().enumerate() {
        editor.add_subcategory()?;
        editor.set_subcategory(i, value.as_str())?;
    }
    Ok(())
}
