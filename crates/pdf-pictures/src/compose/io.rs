//! Image loading and document saving around composition

use crate::types::*;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Load and decode a single image, normalized to 8-bit RGB
pub async fn load_image(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
    Ok(image.into_rgb8())
}

/// Load several images, keeping one outcome per path so callers can report
/// failures and continue with the images that decoded.
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Vec<(PathBuf, Result<RgbImage>)> {
    let mut outcomes = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref().to_owned();
        let result = load_image(&path).await;
        outcomes.push((path, result));
    }
    outcomes
}

/// Append `.pdf` to a file name that does not already end with it
pub fn normalize_pdf_file_name(name: &str) -> String {
    if name.ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{}.pdf", name)
    }
}

/// Save the composed document
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
