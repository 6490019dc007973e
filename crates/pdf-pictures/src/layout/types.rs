//! Layout data types

use crate::constants::mm_to_pt;

/// Tolerance used when comparing millimeter coordinates
pub const LAYOUT_EPSILON_MM: f32 = 1e-3;

/// A rectangular area in millimeters, origin top-left, y downward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x - LAYOUT_EPSILON_MM
            && other.y >= self.y - LAYOUT_EPSILON_MM
            && other.right() <= self.right() + LAYOUT_EPSILON_MM
            && other.bottom() <= self.bottom() + LAYOUT_EPSILON_MM
    }

    /// Convert to PDF user space `[x, y, width, height]` in points, where
    /// the origin is the bottom-left corner of a page `page_height_mm` tall.
    pub fn to_pdf_points(&self, page_height_mm: f32) -> [f32; 4] {
        [
            mm_to_pt(self.x),
            mm_to_pt(page_height_mm - self.bottom()),
            mm_to_pt(self.width),
            mm_to_pt(self.height),
        ]
    }
}

/// Geometry of one composed page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// The full page, painted with the margin color
    pub page: Rect,
    /// The area inside the margins, painted with the background color
    pub content: Rect,
    /// Where the image is drawn
    pub image: Rect,
}

impl PageLayout {
    /// The image extends past the content area
    pub fn overflows_content(&self) -> bool {
        !self.content.contains(&self.image)
    }

    /// The image extends past the page itself and will be cut
    pub fn overflows_page(&self) -> bool {
        !self.page.contains(&self.image)
    }
}
