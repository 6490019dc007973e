pub mod compose;
pub mod constants;
pub mod layout;
mod options;
pub mod render;
mod types;

pub use image::RgbImage;

pub use compose::{
    compose, compose_async, compose_document, load_image, load_images, normalize_pdf_file_name,
    save_pdf,
};
pub use layout::{CompositionPlan, PageLayout, Rect, layout_page, place_image, plan};
pub use options::*;
pub use types::*;
