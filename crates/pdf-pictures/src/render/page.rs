//! Output page rendering
//!
//! Every page is drawn in three steps:
//! 1. fill the whole page with the margin color
//! 2. fill the content area with the background color
//! 3. draw the image XObject at its placement

use crate::constants::{IMAGE_RESOURCE_PREFIX, mm_to_pt};
use crate::layout::{PageLayout, Rect};
use crate::options::LayoutOptions;
use crate::types::{OverflowPolicy, Result, RgbColor};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

// =============================================================================
// Public API
// =============================================================================

/// Resource name of the image drawn on the page at `index` (`Im1` for the first page)
pub fn image_resource_name(index: usize) -> String {
    format!("{}{}", IMAGE_RESOURCE_PREFIX, index + 1)
}

/// Content stream operations for one page.
pub fn page_operations(
    layout: &PageLayout,
    options: &LayoutOptions,
    image_name: &str,
) -> Vec<Operation> {
    let page_height = layout.page.height;
    let mut ops = Vec::new();

    // Margin and background fills
    ops.push(Operation::new("q", vec![]));
    push_fill(&mut ops, &layout.page, page_height, options.margin_color);
    push_fill(&mut ops, &layout.content, page_height, options.background_color);
    ops.push(Operation::new("Q", vec![]));

    // Image placement
    ops.push(Operation::new("q", vec![]));
    if options.overflow == OverflowPolicy::Clip {
        ops.push(rect_operation(&layout.content, page_height));
        ops.push(Operation::new("W", vec![]));
        ops.push(Operation::new("n", vec![]));
    }
    let [x, y, width, height] = layout.image.to_pdf_points(page_height);
    ops.push(Operation::new(
        "cm",
        vec![
            width.into(),
            Object::Integer(0),
            Object::Integer(0),
            height.into(),
            x.into(),
            y.into(),
        ],
    ));
    ops.push(Operation::new(
        "Do",
        vec![Object::Name(image_name.as_bytes().to_vec())],
    ));
    ops.push(Operation::new("Q", vec![]));

    ops
}

/// Render one composed page into `output` and return its object ID.
///
/// # Arguments
/// * `output` - The output document
/// * `layout` - Geometry of the page
/// * `options` - Layout options (colors and overflow policy)
/// * `index` - Zero-based page index, used for the image resource name
/// * `image_id` - Object ID of the page's Image XObject
/// * `parent_pages_id` - The parent Pages object ID
pub fn render_page(
    output: &mut Document,
    layout: &PageLayout,
    options: &LayoutOptions,
    index: usize,
    image_id: ObjectId,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let image_name = image_resource_name(index);

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(mm_to_pt(layout.page.width)),
            Object::Real(mm_to_pt(layout.page.height)),
        ]),
    );

    let mut xobjects = Dictionary::new();
    xobjects.set(image_name.as_bytes(), Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = Content {
        operations: page_operations(layout, options, &image_name),
    };
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.encode()?));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Install the page tree and catalog for the rendered pages.
pub fn finish_page_tree(output: &mut Document, pages_tree_id: ObjectId, page_ids: &[ObjectId]) {
    let page_refs: Vec<Object> = page_ids.iter().copied().map(Object::Reference).collect();
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}

// =============================================================================
// Helper Functions
// =============================================================================

fn rect_operation(rect: &Rect, page_height_mm: f32) -> Operation {
    let [x, y, width, height] = rect.to_pdf_points(page_height_mm);
    Operation::new("re", vec![x.into(), y.into(), width.into(), height.into()])
}

fn push_fill(ops: &mut Vec<Operation>, rect: &Rect, page_height_mm: f32, color: RgbColor) {
    let [r, g, b] = color.to_unit();
    ops.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
    ops.push(rect_operation(rect, page_height_mm));
    ops.push(Operation::new("f", vec![]));
}
