//! JSON parsing functions for catalog API responses.
//!
//! Every stored document passes through [`CategoryRecord::from_json`] here,
//! so consumers never see raw JSON.

use serde_json::Value;
use storefront_core::{Category, CategoryRecord};

use crate::error::{HttpError, HttpResult};

/// Parse the category collection.
///
/// The body must be an array; individual entries that do not match the
/// schema become malformed records instead of failing the whole list.
pub fn parse_category_list(json: Value) -> HttpResult<Vec<CategoryRecord>> {
    match json {
        Value::Array(items) => Ok(items.into_iter().map(CategoryRecord::from_json).collect()),
        other => Err(HttpError::InvalidResponse {
            message: format!("expected an array of categories, got {}", kind(&other)),
        }),
    }
}

/// Read the category echoed back by a successful create or update.
///
/// Accepts the bare document or one wrapped as `{"category": {..}}`.
/// Anything else yields `None`: the write already happened, so an
/// unreadable body is not a failure.
pub fn parse_saved_category(json: &Value) -> Option<Category> {
    let parsed = Category::from_json(json).or_else(|reason| match json.get("category") {
        Some(inner @ Value::Object(_)) => Category::from_json(inner),
        _ => Err(reason),
    });
    match parsed {
        Ok(category) => Some(category),
        Err(reason) => {
            tracing::warn!(%reason, "store response is not a category");
            None
        }
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
