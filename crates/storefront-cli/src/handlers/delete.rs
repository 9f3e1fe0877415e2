//! Delete command handler.

use anyhow::Result;
use storefront_core::CategoryId;

use crate::bootstrap::CliContext;
use crate::handlers::finish;

/// Execute the delete command.
///
/// The id is sent as given; the store decides whether it exists.
pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    let mut manager = ctx.admin().category_manager();
    let notice = manager.delete(&CategoryId::new(id)).await;
    finish(&notice)
}
