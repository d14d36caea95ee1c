//! PNG encoding for uploads.
//!
//! PNG is what a browser canvas produces by default, so it is the default
//! upload format. It is lossless, which also makes it the format of choice for
//! tests that compare pixels after a decode.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate_raster, EncodeError};

/// Encode RGB pixel data to PNG bytes.
///
/// # Errors
///
/// Same validation as [`encode_jpeg`](super::encode_jpeg).
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate_raster(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
