//! Multipart payload for category writes.
//!
//! The payload is built as a plain value first so tests can inspect exactly
//! which fields a request would carry; it is converted to a reqwest form only
//! when sent.

use storefront_core::ImageFile;

use crate::error::HttpResult;

/// Scalar field carrying the category name.
pub const FIELD_CATEGORY: &str = "category";
/// Shared field name for uploaded image files.
pub const FIELD_FILES: &str = "files";

/// Indexed field name for the subcategory at `index`.
pub fn subcategory_field(index: usize) -> String {
    format!("subcategories[{index}]")
}

/// Ordered multipart payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartForm {
    text: Vec<(String, String)>,
    files: Vec<(String, ImageFile)>,
}

impl MultipartForm {
    /// Build the category payload: name, indexed subcategories, then files.
    ///
    /// An empty `images` slice produces a form without any file field.
    pub fn category(name: &str, subcategories: &[String], images: &[ImageFile]) -> Self {
        let mut form = Self::default();
        form.push_text(FIELD_CATEGORY, name);
        for (index, sub) in subcategories.iter().enumerate() {
            form.push_text(subcategory_field(index), sub.as_str());
        }
        for image in images {
            form.files.push((FIELD_FILES.to_string(), image.clone()));
        }
        form
    }

    fn push_text(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.text.push((field.into(), value.into()));
    }

    /// Value of the first text field with this name.
    pub fn text_value(&self, field: &str) -> Option<&str> {
        self.text
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Subcategories recovered from the indexed fields, in index order.
    pub fn subcategories(&self) -> Vec<&str> {
        let mut indexed: Vec<(usize, &str)> = self
            .text
            .iter()
            .filter_map(|(name, value)| {
                name.strip_prefix("subcategories[")
                    .and_then(|rest| rest.strip_suffix(']'))
                    .and_then(|index| index.parse().ok())
                    .map(|index| (index, value.as_str()))
            })
            .collect();
        indexed.sort_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, value)| value).collect()
    }

    /// Files attached to the form, in order.
    pub fn files(&self) -> impl Iterator<Item = &ImageFile> {
        self.files.iter().map(|(_, file)| file)
    }

    /// Whether any file field is present.
    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    /// Convert into a reqwest multipart form.
    pub fn into_reqwest(self) -> HttpResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.text {
            form = form.text(name, value);
        }
        for (name, file) in self.files {
            let part = reqwest::multipart::Part::bytes(file.bytes().to_vec())
                .file_name(file.file_name().to_string())
                .mime_str(file.content_type())?;
            form = form.part(name, part);
        }
        Ok(form)
    }
}
