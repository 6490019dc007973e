//! Shared constants for page composition

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Output Document
// =============================================================================

/// PDF version written to the document header
pub const PDF_VERSION: &str = "1.7";

/// Prefix of the per-page image XObject resource name (`Im1`, `Im2`, ...)
pub const IMAGE_RESOURCE_PREFIX: &str = "Im";

/// Bits per color component for embedded images
pub const IMAGE_BITS_PER_COMPONENT: i64 = 8;

// =============================================================================
// Staging
// =============================================================================

/// Prefix of the temporary directory that holds staged image files
pub const STAGING_DIR_PREFIX: &str = "pdf-pictures-";

/// File name of a staged image, by zero-based page index
pub fn staged_file_name(index: usize) -> String {
    format!("page-{:04}.png", index + 1)
}
