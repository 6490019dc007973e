//! Page geometry for composition
//!
//! All rectangles here are in millimeters with the origin at the top-left
//! corner of the page and y growing downward. Conversion to PDF user space
//! happens in the render module.

mod placement;
mod planning;
mod types;

pub use placement::*;
pub use planning::*;
pub use types::*;

pub(crate) use placement::page_layout;
pub(crate) use planning::check_image_dimensions;
