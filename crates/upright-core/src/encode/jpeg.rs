//! JPEG encoding for uploads.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{validate_raster, EncodeError};

/// Encode RGB pixel data to JPEG bytes.
///
/// `quality` is clamped to 1-100.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero-sized raster,
/// `EncodeError::InvalidPixelData` if `pixels` is not `width * height * 3`
/// bytes, and `EncodeError::EncodingFailed` if the encoder itself fails.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate_raster(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg_markers() {
        let pixels = vec![128u8; 64 * 48 * 3];
        let jpeg = encode_jpeg(&pixels, 64, 48, 90).unwrap();

        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let pixels = vec![128u8; 10 * 10 * 3];
        assert!(encode_jpeg(&pixels, 10, 10, 0).is_ok());
        assert!(encode_jpeg(&pixels, 10, 10, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_rejects_mismatched_buffer() {
        let pixels = vec![128u8; 99 * 100 * 3];
        assert!(matches!(
            encode_jpeg(&pixels, 100, 100, 90),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_rejects_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 100, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encoded_jpeg_is_scannable() {
        // Encoder output has no EXIF block
        let jpeg = encode_jpeg(&[255, 0, 0], 1, 1, 90).unwrap();
        assert_eq!(
            crate::scan::scan_orientation(&jpeg),
            Err(crate::scan::ScanError::NotFound)
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: valid rasters always produce an SOI/EOI-framed stream.
        #[test]
        fn prop_valid_input_produces_jpeg(
            (width, height) in (1u32..=40, 1u32..=40),
            quality in 1u8..=100,
        ) {
            let pixels = vec![96u8; (width * height * 3) as usize];
            let jpeg = encode_jpeg(&pixels, width, height, quality).unwrap();

            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
        }

        /// Property: encoding is deterministic.
        #[test]
        fn prop_deterministic_output((width, height) in (1u32..=20, 1u32..=20)) {
            let pixels: Vec<u8> = (0..(width * height * 3) as usize)
                .map(|i| ((i * 37) % 256) as u8)
                .collect();

            let first = encode_jpeg(&pixels, width, height, 85).unwrap();
            let second = encode_jpeg(&pixels, width, height, 85).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
