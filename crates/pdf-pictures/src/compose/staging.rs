//! Scoped temporary files for staged image embedding
//!
//! A [`StagingArea`] owns a uniquely named temporary directory. Dropping it
//! removes the directory together with every file staged into it, so the
//! artifacts of a failed composition are gone before the error reaches the
//! caller.

use crate::constants::{STAGING_DIR_PREFIX, staged_file_name};
use crate::types::*;
use image::{ImageFormat, RgbImage};
use lopdf::{Document, ObjectId};
use std::path::Path;
use tempfile::TempDir;

use crate::render::create_image_xobject;

pub(crate) struct StagingArea {
    dir: TempDir,
    staged: usize,
}

impl StagingArea {
    /// Create a fresh staging directory under `parent`, or the system temp dir.
    pub(crate) fn create(parent: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_DIR_PREFIX);
        let dir = match parent {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        log::debug!("Staging images in {}", dir.path().display());
        Ok(Self { dir, staged: 0 })
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `image` as a PNG file, then read and decode it back.
    pub(crate) fn stage(&mut self, index: usize, image: &RgbImage) -> Result<RgbImage> {
        let path = self.path().join(staged_file_name(index));

        image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| staging_error(index, &path, e))?;
        self.staged += 1;

        let bytes = std::fs::read(&path).map_err(|e| staging_error(index, &path, e))?;
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .map_err(|e| staging_error(index, &path, e))?;

        Ok(decoded.into_rgb8())
    }

    /// Remove the directory and every staged file.
    pub(crate) fn close(self) -> Result<()> {
        log::debug!(
            "Removing {} staged image(s) from {}",
            self.staged,
            self.path().display()
        );
        self.dir.close()?;
        Ok(())
    }
}

fn staging_error(index: usize, path: &Path, error: impl std::fmt::Display) -> ComposeError {
    ComposeError::ImageProcessing {
        index,
        reason: format!("staging through {} failed: {}", path.display(), error),
    }
}

/// Embeds images into the output document, either straight from memory or
/// through a [`StagingArea`].
pub(crate) enum ImageEmbedder {
    InMemory,
    Staged(StagingArea),
}

impl ImageEmbedder {
    pub(crate) fn new(embedding: &ImageEmbedding) -> Result<Self> {
        match embedding {
            ImageEmbedding::InMemory => Ok(Self::InMemory),
            ImageEmbedding::Staged { staging_dir } => Ok(Self::Staged(StagingArea::create(
                staging_dir.as_deref(),
            )?)),
        }
    }

    pub(crate) fn embed(
        &mut self,
        output: &mut Document,
        index: usize,
        image: &RgbImage,
    ) -> Result<ObjectId> {
        match self {
            Self::InMemory => create_image_xobject(output, index, image),
            Self::Staged(area) => {
                let staged = area.stage(index, image)?;
                create_image_xobject(output, index, &staged)
            }
        }
    }

    /// Release any resources held for embedding. Call only after the
    /// document has been serialized.
    pub(crate) fn finish(self) -> Result<()> {
        match self {
            Self::InMemory => Ok(()),
            Self::Staged(area) => area.close(),
        }
    }
}
