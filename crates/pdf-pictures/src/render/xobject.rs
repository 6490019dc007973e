//! Image XObject creation

use crate::constants::IMAGE_BITS_PER_COMPONENT;
use crate::types::{ComposeError, Result};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::RgbImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

/// Embed an RGB image into `output` as a Flate-compressed Image XObject.
///
/// `index` is the zero-based position of the image in the input sequence and
/// is only used for error reporting.
pub fn create_image_xobject(
    output: &mut Document,
    index: usize,
    image: &RgbImage,
) -> Result<ObjectId> {
    let data = deflate(image.as_raw()).map_err(|e| ComposeError::ImageProcessing {
        index,
        reason: format!("failed to compress image data: {}", e),
    })?;

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(i64::from(image.width())));
    dict.set("Height", Object::Integer(i64::from(image.height())));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(IMAGE_BITS_PER_COMPONENT));
    dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));

    // The data is already compressed; keep lopdf from compressing it again
    let stream = Stream::new(dict, data).with_compression(false);
    Ok(output.add_object(stream))
}

fn deflate(samples: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(samples)?;
    encoder.finish()
}
