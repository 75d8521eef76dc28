//! Image XObject creation
//!
//! Card images are decoded, flattened to 8-bit RGB and stored as
//! Flate-compressed image XObjects.

use crate::types::*;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Stream, dictionary};
use std::io::Write;
use std::path::Path;

/// Decode an image file into a PDF image stream
pub fn load_image_stream(path: &Path) -> Result<Stream> {
    let image = ::image::open(path).map_err(|source| DeckError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(rgb.as_raw())?;
    let compressed = encoder.finish()?;

    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width as i64,
        "Height" => height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8_i64,
        "Filter" => "FlateDecode",
    };
    Ok(Stream::new(dict, compressed))
}
