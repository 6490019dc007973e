//! Image placement within the content area
//!
//! The page is split into two painted regions:
//! - the full page, filled with the margin color
//! - the content area inside the margins, filled with the background color
//!
//! The image is anchored to the content area according to the
//! [`OverflowPolicy`].

use crate::options::LayoutOptions;
use crate::types::{ComposeError, OverflowPolicy, Result};

use super::{PageLayout, Rect};

/// Calculate the geometry of a page holding an image of the given pixel size.
///
/// Validates the options and the image dimensions first.
pub fn layout_page(options: &LayoutOptions, width_px: u32, height_px: u32) -> Result<PageLayout> {
    options.validate()?;
    if width_px == 0 || height_px == 0 {
        return Err(ComposeError::InvalidConfiguration(format!(
            "Image dimensions must be non-zero, got {}x{}",
            width_px, height_px
        )));
    }
    Ok(page_layout(options, width_px, height_px))
}

/// Page geometry for already validated options and a non-empty image.
pub(crate) fn page_layout(options: &LayoutOptions, width_px: u32, height_px: u32) -> PageLayout {
    let (page_width, page_height) = options.page_dimensions_mm();
    let (content_width, content_height) = options.content_dimensions_mm();

    let page = Rect::new(0.0, 0.0, page_width, page_height);
    let content = Rect::new(
        options.margins.left_mm,
        options.margins.top_mm,
        content_width,
        content_height,
    );
    let image = place_image(&content, width_px, height_px, options.overflow);

    PageLayout {
        page,
        content,
        image,
    }
}

/// Calculate where an image of `width_px` x `height_px` is drawn.
///
/// `Spill` and `Clip` fill the content width and derive the height from the
/// image's aspect ratio, anchored at the top-left of the content area. The
/// height is never clamped. `Fit` scales uniformly so the whole image fits
/// and centers it.
pub fn place_image(content: &Rect, width_px: u32, height_px: u32, policy: OverflowPolicy) -> Rect {
    let src_width = width_px as f32;
    let src_height = height_px as f32;

    match policy {
        OverflowPolicy::Spill | OverflowPolicy::Clip => Rect::new(
            content.x,
            content.y,
            content.width,
            content.width * src_height / src_width,
        ),
        OverflowPolicy::Fit => {
            let scale = (content.width / src_width).min(content.height / src_height);
            let width = src_width * scale;
            let height = src_height * scale;
            Rect::new(
                content.x + (content.width - width) / 2.0,
                content.y + (content.height - height) / 2.0,
                width,
                height,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Margins, Orientation, PageSize};

    fn options(margins: Margins, overflow: OverflowPolicy) -> LayoutOptions {
        LayoutOptions {
            margins,
            overflow,
            ..Default::default()
        }
    }

    #[test]
    fn test_content_area_with_margins() {
        let margins = Margins {
            top_mm: 20.0,
            bottom_mm: 30.0,
            left_mm: 5.0,
            right_mm: 15.0,
        };
        let layout = layout_page(&options(margins, OverflowPolicy::Spill), 100, 100).unwrap();

        assert_eq!(layout.page, Rect::new(0.0, 0.0, 210.0, 297.0));
        assert!((layout.content.x - 5.0).abs() < 1e-4);
        assert!((layout.content.y - 20.0).abs() < 1e-4);
        assert!((layout.content.width - 190.0).abs() < 1e-4);
        assert!((layout.content.height - 247.0).abs() < 1e-4);
    }

    #[test]
    fn test_spill_is_width_driven() {
        // Content area is 190 x 277mm; a square image gets 190 x 190
        let layout = layout_page(
            &options(Margins::uniform(10.0), OverflowPolicy::Spill),
            640,
            640,
        )
        .unwrap();

        assert!((layout.image.width - 190.0).abs() < 1e-4);
        assert!((layout.image.height - 190.0).abs() < 1e-4);
        assert_eq!(layout.image.x, layout.content.x);
        assert_eq!(layout.image.y, layout.content.y);
        assert!(!layout.overflows_content());
    }

    #[test]
    fn test_spill_does_not_clamp_tall_images() {
        // 1:3 image on a 190mm wide content area → 570mm tall
        let layout = layout_page(
            &options(Margins::uniform(10.0), OverflowPolicy::Spill),
            100,
            300,
        )
        .unwrap();

        assert!((layout.image.height - 570.0).abs() < 1e-3);
        assert!(layout.overflows_content());
        assert!(layout.overflows_page());
    }

    #[test]
    fn test_clip_uses_spill_geometry() {
        let spill = options(Margins::uniform(10.0), OverflowPolicy::Spill);
        let clip = options(Margins::uniform(10.0), OverflowPolicy::Clip);

        assert_eq!(
            layout_page(&spill, 100, 300).unwrap().image,
            layout_page(&clip, 100, 300).unwrap().image
        );
    }

    #[test]
    fn test_fit_centers_inside_content() {
        let content = Rect::new(10.0, 10.0, 200.0, 100.0);

        // Tall image is height-limited and centered horizontally
        let rect = place_image(&content, 50, 100, OverflowPolicy::Fit);
        assert!((rect.height - 100.0).abs() < 1e-4);
        assert!((rect.width - 50.0).abs() < 1e-4);
        assert!((rect.center_x() - content.center_x()).abs() < 1e-4);
        assert!(content.contains(&rect));

        // Wide image is width-limited and centered vertically
        let rect = place_image(&content, 400, 100, OverflowPolicy::Fit);
        assert!((rect.width - 200.0).abs() < 1e-4);
        assert!((rect.height - 50.0).abs() < 1e-4);
        assert!((rect.center_y() - content.center_y()).abs() < 1e-4);
    }

    #[test]
    fn test_landscape_swaps_page() {
        let mut opts = options(Margins::uniform(0.0), OverflowPolicy::Spill);
        opts.orientation = Orientation::Landscape;
        opts.page_size = PageSize::Letter;

        let layout = layout_page(&opts, 10, 10).unwrap();
        assert_eq!(layout.page, Rect::new(0.0, 0.0, 279.4, 215.9));
    }

    #[test]
    fn test_zero_sized_image_rejected() {
        let opts = LayoutOptions::default();
        assert!(matches!(
            layout_page(&opts, 0, 10),
            Err(ComposeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_to_pdf_points_flips_y() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let [x, y, w, h] = rect.to_pdf_points(297.0);

        assert!((x - crate::constants::mm_to_pt(10.0)).abs() < 1e-3);
        // Bottom edge sits at 297 - 60 = 237mm from the page bottom
        assert!((y - crate::constants::mm_to_pt(237.0)).abs() < 1e-3);
        assert!((w - crate::constants::mm_to_pt(30.0)).abs() < 1e-3);
        assert!((h - crate::constants::mm_to_pt(40.0)).abs() < 1e-3);
    }
}
