use crate::options::LayoutOptions;
use crate::types::*;

use super::PageLayout;
use super::placement::page_layout;

/// Layout of every page of a composition, computed without rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionPlan {
    /// Page width and height in millimeters
    pub page_dimensions_mm: (f32, f32),
    /// One layout per input image, in input order
    pub pages: Vec<PageLayout>,
    /// Pages whose image extends past the content area
    pub overflowing_content: usize,
    /// Pages whose image extends past the page edge
    pub overflowing_page: usize,
}

impl CompositionPlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Plan a composition from image pixel dimensions.
///
/// Applies the same checks as [`compose`](crate::compose): the options must
/// validate, there must be at least one image and no image may be empty.
pub fn plan(dimensions: &[(u32, u32)], options: &LayoutOptions) -> Result<CompositionPlan> {
    options.validate()?;
    if dimensions.is_empty() {
        return Err(ComposeError::InvalidConfiguration(
            "No images to compose".to_string(),
        ));
    }

    let pages = dimensions
        .iter()
        .enumerate()
        .map(|(index, &(width, height))| {
            check_image_dimensions(index, width, height)?;
            Ok(page_layout(options, width, height))
        })
        .collect::<Result<Vec<_>>>()?;

    let overflowing_content = pages.iter().filter(|p| p.overflows_content()).count();
    let overflowing_page = pages.iter().filter(|p| p.overflows_page()).count();

    Ok(CompositionPlan {
        page_dimensions_mm: options.page_dimensions_mm(),
        pages,
        overflowing_content,
        overflowing_page,
    })
}

pub(crate) fn check_image_dimensions(index: usize, width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ComposeError::ImageProcessing {
            index,
            reason: format!("image has no pixels ({}x{})", width, height),
        });
    }
    Ok(())
}
