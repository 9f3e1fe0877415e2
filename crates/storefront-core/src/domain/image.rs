//! Image types: files selected for upload and references returned by the store.

use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Path shown when a category has no stored image.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "placeholder-image.jpg";

/// Opaque storage reference returned by the store, usually a relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the reference already carries a scheme and needs no base URL.
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl From<&str> for ImageRef {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An image file selected for upload.
///
/// The bytes are reference-counted so drafts can be cloned into request
/// payloads without copying the file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

impl ImageFile {
    /// Create an image file with an explicit MIME type.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Create an image file, guessing the MIME type from the file name.
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub const fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Guess an image MIME type from a file extension.
pub fn guess_content_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Turns stored image references into URLs usable in an `<img>` tag.
///
/// The base URL is injected configuration; it is the same value the store
/// client is built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base_url: String,
    placeholder: String,
}

impl ImageResolver {
    /// Create a resolver for the given API base URL with the default placeholder.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            placeholder: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Override the placeholder path used when no image is stored.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve one stored reference against the base URL.
    pub fn resolve(&self, image: &ImageRef) -> String {
        if image.is_absolute() {
            return image.as_str().to_string();
        }
        self.join(image.as_str())
    }

    /// Resolve the thumbnail (first image) or fall back to the placeholder.
    pub fn thumbnail(&self, images: &[ImageRef]) -> String {
        images
            .first()
            .map_or_else(|| self.join(&self.placeholder), |image| self.resolve(image))
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type("photo.JPG"), "image/jpeg");
        assert_eq!(guess_content_type("logo.png"), "image/png");
        assert_eq!(guess_content_type("noext"), "application/octet-stream");
    }

    #[test]
    fn test_image_file_from_bytes() {
        let file = ImageFile::from_bytes("cover.webp", vec![1_u8, 2, 3]);
        assert_eq!(file.content_type(), "image/webp");
        assert_eq!(file.len(), 3);
        assert!(!file.is_empty());
    }

    #[test]
    fn test_resolve_joins_with_single_slash() {
        let with_slash = ImageResolver::new("http://localhost:5000/");
        let without_slash = ImageResolver::new("http://localhost:5000");
        let image = ImageRef::from("uploads/a.jpg");

        assert_eq!(with_slash.resolve(&image), "http://localhost:5000/uploads/a.jpg");
        assert_eq!(without_slash.resolve(&image), "http://localhost:5000/uploads/a.jpg");
        assert_eq!(
            with_slash.resolve(&ImageRef::from("/uploads/a.jpg")),
            "http://localhost:5000/uploads/a.jpg"
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_urls() {
        let resolver = ImageResolver::new("http://localhost:5000/");
        let image = ImageRef::from("https://cdn.example.com/a.jpg");
        assert_eq!(resolver.resolve(&image), "https://cdn.example.com/a.jpg");
    }

    #[test]
    fn test_thumbnail_falls_back_to_placeholder() {
        let resolver = ImageResolver::new("http://localhost:5000/");
        assert_eq!(
            resolver.thumbnail(&[]),
            "http://localhost:5000/placeholder-image.jpg"
        );

        let custom = resolver.with_placeholder("static/none.png");
        assert_eq!(custom.thumbnail(&[]), "http://localhost:5000/static/none.png");
    }

    #[test]
    fn test_thumbnail_uses_first_image() {
        let resolver = ImageResolver::new("http://shop.test/");
        let images = vec![ImageRef::from("first.jpg"), ImageRef::from("second.jpg")];
        assert_eq!(resolver.thumbnail(&images), "http://shop.test/first.jpg");
    }
}
