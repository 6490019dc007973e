//! PDF rendering for composed pages
//!
//! This module handles all PDF-specific operations:
//! - Embedding RGB images as Image XObjects
//! - Generating page content streams (color fills, image placement)
//! - Building page dictionaries and the page tree

mod page;
mod xobject;

pub use page::*;
pub use xobject::create_image_xobject;
