//! Category domain types.
//!
//! A stored category is normalized once, at the store boundary, into a
//! [`CategoryRecord`]. Consumers match on the record instead of re-checking
//! the JSON shape of stored data themselves.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::image::{ImageFile, ImageRef};
use crate::validation::{self, ValidationError};

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque identifier assigned by the store when a category is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Wrap a store-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Persisted category
// ─────────────────────────────────────────────────────────────────────────────

/// A category as confirmed by the store.
///
/// Serialized with the store's field names (`_id`, `category`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier, immutable after creation.
    #[serde(rename = "_id")]
    pub id: CategoryId,
    /// Display name of the category.
    #[serde(rename = "category")]
    pub name: String,
    /// Subcategories in display order.
    #[serde(default)]
    pub subcategories: Vec<String>,
    /// Stored image references. Index 0 is the thumbnail.
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

impl Category {
    /// The canonical thumbnail reference, if the category has any image.
    pub fn thumbnail(&self) -> Option<&ImageRef> {
        self.images.first()
    }

    /// Normalize a JSON document from the store into a category.
    ///
    /// Absent or `null` list fields are read as empty lists. Any other shape
    /// mismatch is reported as a reason string.
    pub fn from_json(value: &Value) -> Result<Self, String> {
        let object = value
            .as_object()
            .ok_or_else(|| "record is not a JSON object".to_string())?;

        let id = object
            .get("_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| "missing or non-string `_id`".to_string())?;

        let name = object
            .get("category")
            .and_then(Value::as_str)
            .ok_or_else(|| "`category` is not a string".to_string())?;

        let subcategories = string_list(object.get("subcategories"), "subcategories")?;
        let images = string_list(object.get("images"), "images")?
            .into_iter()
            .map(ImageRef::from)
            .collect();

        Ok(Self {
            id: CategoryId::new(id),
            name: name.to_string(),
            subcategories,
            images,
        })
    }
}

fn string_list(value: Option<&Value>, field: &str) -> Result<Vec<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| format!("`{field}` contains a non-string entry"))
            })
            .collect(),
        Some(_) => Err(format!("`{field}` is not an array")),
    }
}

/// Keep only the string entries of a list field, ignoring everything else.
fn salvage_strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────────────
// Normalized store record
// ─────────────────────────────────────────────────────────────────────────────

/// A stored document that did not match the category schema.
///
/// Whatever could be read is kept so the record can still be listed and
/// deleted by id.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedRecord {
    /// Identifier, when the document carried a string `_id`.
    pub id: Option<CategoryId>,
    /// Name, when `category` was a string.
    pub name: Option<String>,
    /// String entries of `subcategories`, if it was an array.
    pub subcategories: Vec<String>,
    /// String entries of `images`, if it was an array.
    pub images: Vec<ImageRef>,
    /// Why normalization rejected the document.
    pub reason: String,
    /// The document as received.
    pub raw: Value,
}

impl MalformedRecord {
    fn salvage(raw: Value, reason: String) -> Self {
        let field = |name: &str| raw.get(name);
        Self {
            id: field("_id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .map(CategoryId::new),
            name: field("category").and_then(Value::as_str).map(str::to_string),
            subcategories: salvage_strings(field("subcategories")),
            images: salvage_strings(field("images"))
                .into_iter()
                .map(ImageRef::from)
                .collect(),
            reason,
            raw,
        }
    }
}

/// A category document after boundary normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryRecord {
    /// The document matched the category schema.
    Valid(Category),
    /// The document did not; see [`MalformedRecord::reason`].
    Malformed(MalformedRecord),
}

impl CategoryRecord {
    /// Normalize one stored JSON document.
    pub fn from_json(value: Value) -> Self {
        match Category::from_json(&value) {
            Ok(category) => Self::Valid(category),
            Err(reason) => {
                tracing::warn!(%reason, "stored category record is malformed");
                Self::Malformed(MalformedRecord::salvage(value, reason))
            }
        }
    }

    pub fn id(&self) -> Option<&CategoryId> {
        match self {
            Self::Valid(category) => Some(&category.id),
            Self::Malformed(record) => record.id.as_ref(),
        }
    }

    /// The name, or `None` when the stored name was not a string.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Valid(category) => Some(&category.name),
            Self::Malformed(record) => record.name.as_deref(),
        }
    }

    pub fn subcategories(&self) -> &[String] {
        match self {
            Self::Valid(category) => &category.subcategories,
            Self::Malformed(record) => &record.subcategories,
        }
    }

    pub fn images(&self) -> &[ImageRef] {
        match self {
            Self::Valid(category) => &category.images,
            Self::Malformed(record) => &record.images,
        }
    }

    pub const fn as_category(&self) -> Option<&Category> {
        match self {
            Self::Valid(category) => Some(category),
            Self::Malformed(_) => None,
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

impl From<Category> for CategoryRecord {
    fn from(category: Category) -> Self {
        Self::Valid(category)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Write payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Payload for creating a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    /// Subcategories in display order; transmitted index by index.
    pub subcategories: Vec<String>,
    /// Images to upload, in order. At least one is required.
    pub images: Vec<ImageFile>,
}

impl NewCategory {
    /// Check the payload before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_name(&self.name)?;
        validation::validate_subcategories(&self.subcategories)?;
        if self.images.is_empty() {
            return Err(ValidationError::MissingImage);
        }
        Ok(())
    }
}

/// Payload for updating a category.
///
/// An empty `images` list means "keep the stored images": no file field is
/// transmitted at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub name: String,
    pub subcategories: Vec<String>,
    /// Replacement images. Empty leaves the stored images untouched.
    pub images: Vec<ImageFile>,
}

impl CategoryUpdate {
    /// Check the payload before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_name(&self.name)?;
        validation::validate_subcategories(&self.subcategories)
    }

    /// Whether this update replaces stored images.
    pub fn replaces_images(&self) -> bool {
        !self.images.is_empty()
    }
}
