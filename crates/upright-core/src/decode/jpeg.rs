//! Bitmap decoding for uploaded photos.
//!
//! EXIF orientation is deliberately NOT applied here: the raw sensor-order
//! bitmap is handed to the normalizer, which owns rotation.

use std::io::Cursor;

use image::{ImageError, ImageReader};

use super::{Bitmap, DecodeError};

/// Decode encoded image bytes (JPEG or PNG) into an RGB bitmap.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for empty input or a format the
/// decoder does not support, and `DecodeError::CorruptedFile` if decoding
/// fails partway.
pub fn decode_bitmap(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(Bitmap::from_rgb_image(img.into_rgb8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode_jpeg, encode_png};

    fn gradient_pixels(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width.max(1)) as u8);
                pixels.push((y * 255 / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        pixels
    }

    #[test]
    fn test_decode_jpeg() {
        let jpeg = encode_jpeg(&gradient_pixels(16, 8), 16, 8, 90).unwrap();
        let bitmap = decode_bitmap(&jpeg).unwrap();

        assert_eq!(bitmap.width, 16);
        assert_eq!(bitmap.height, 8);
        assert_eq!(bitmap.pixels.len(), 16 * 8 * 3);
    }

    #[test]
    fn test_decode_png_is_lossless() {
        let pixels = gradient_pixels(5, 3);
        let png = encode_png(&pixels, 5, 3).unwrap();
        let bitmap = decode_bitmap(&png).unwrap();

        assert_eq!((bitmap.width, bitmap.height), (5, 3));
        assert_eq!(bitmap.pixels, pixels);
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode_bitmap(&[]), Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode_bitmap(&[0x00, 0x01, 0x02, 0x03]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let jpeg = encode_jpeg(&gradient_pixels(32, 32), 32, 32, 90).unwrap();
        let result = decode_bitmap(&jpeg[..40]);
        assert!(result.is_err());
    }
}
