//! Page composition - one image per page, framed by colored margins
//!
//! This module orchestrates the composition process:
//! 1. Validate the options and the image sequence
//! 2. Calculate each page's layout
//! 3. Embed each image and render its page
//! 4. Serialize the finished document

mod io;
mod staging;

pub use io::{load_image, load_images, normalize_pdf_file_name, save_pdf};

use crate::constants::PDF_VERSION;
use crate::layout::{check_image_dimensions, page_layout};
use crate::options::LayoutOptions;
use crate::render::{finish_page_tree, render_page};
use crate::types::*;
use image::RgbImage;
use lopdf::Document;
use staging::ImageEmbedder;

/// Compose `images` into a PDF, one page per image in input order, and
/// return the serialized document.
///
/// Fails without producing output when `images` is empty, when the options
/// do not validate, or when any single image cannot be processed. Staged
/// image files are removed before this function returns on every path.
pub fn compose(images: &[RgbImage], options: &LayoutOptions) -> Result<Vec<u8>> {
    validate_inputs(images, options)?;

    let mut embedder = ImageEmbedder::new(&options.embedding)?;
    let mut document = build_document(images, options, &mut embedder)?;

    let mut bytes = Vec::new();
    document.save_to(&mut bytes)?;

    // Staged files must outlive serialization
    embedder.finish()?;

    log::info!(
        "Composed {} page(s) into {} bytes",
        images.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Compose `images` on a blocking worker thread.
pub async fn compose_async(images: Vec<RgbImage>, options: LayoutOptions) -> Result<Vec<u8>> {
    options.validate()?;

    tokio::task::spawn_blocking(move || compose(&images, &options)).await?
}

/// Build the composed document without serializing it.
///
/// Only in-memory embedding is supported here: staged files cannot outlive
/// this call, so use [`compose`] for [`ImageEmbedding::Staged`].
pub fn compose_document(images: &[RgbImage], options: &LayoutOptions) -> Result<Document> {
    if options.embedding != ImageEmbedding::InMemory {
        return Err(ComposeError::InvalidConfiguration(
            "compose_document only supports in-memory image embedding".to_string(),
        ));
    }
    validate_inputs(images, options)?;

    let mut embedder = ImageEmbedder::InMemory;
    build_document(images, options, &mut embedder)
}

fn validate_inputs(images: &[RgbImage], options: &LayoutOptions) -> Result<()> {
    if images.is_empty() {
        return Err(ComposeError::InvalidConfiguration(
            "No images to compose".to_string(),
        ));
    }
    options.validate()
}

fn build_document(
    images: &[RgbImage],
    options: &LayoutOptions,
    embedder: &mut ImageEmbedder,
) -> Result<Document> {
    let (page_width, page_height) = options.page_dimensions_mm();
    log::info!(
        "Composing {} image(s) on {} {:?} pages ({} x {} mm)",
        images.len(),
        options.page_size.name(),
        options.orientation,
        page_width,
        page_height
    );

    let mut output = Document::with_version(PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut page_ids = Vec::with_capacity(images.len());

    for (index, image) in images.iter().enumerate() {
        check_image_dimensions(index, image.width(), image.height())?;

        let layout = page_layout(options, image.width(), image.height());
        if layout.overflows_content() {
            log::debug!(
                "Image {} extends past the content area ({:?} overflow)",
                index + 1,
                options.overflow
            );
        }

        let image_id = embedder.embed(&mut output, index, image)?;
        let page_id = render_page(&mut output, &layout, options, index, image_id, pages_tree_id)?;
        page_ids.push(page_id);

        log::debug!(
            "Rendered page {}/{} ({}x{} px)",
            index + 1,
            images.len(),
            image.width(),
            image.height()
        );
    }

    finish_page_tree(&mut output, pages_tree_id, &page_ids);

    Ok(output)
}
