//! Reading image files from disk for upload.

use std::path::Path;

use storefront_core::ImageFile;

use crate::error::CliError;

/// Read one image file. The MIME type is guessed from the extension.
pub async fn load_image(path: &Path) -> Result<ImageFile, CliError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CliError::Arguments(format!("not a file path: {}", path.display())))?
        .to_string();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    if bytes.is_empty() {
        return Err(CliError::Arguments(format!("{} is empty", path.display())));
    }
    tracing::debug!(file = %path.display(), size = bytes.len(), "image loaded");
    Ok(ImageFile::from_bytes(file_name, bytes))
}

/// Read several image files, keeping their order.
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageFile>, CliError> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        images.push(load_image(path.as_ref()).await?);
    }
    Ok(images)
}
