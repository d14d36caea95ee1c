//! Painting a bitmap onto its oriented, resized raster.
//!
//! Painting happens in two passes:
//! 1. Scale the source to the transform's source dimensions with the
//!    configured filter (skipped when the size already matches).
//! 2. Rotate and mirror as an exact pixel permutation.
//!
//! Because the second pass never interpolates, painting with a transform and
//! then with its inverse restores the source pixels bit for bit.

use super::{Dimensions, NormalizeError, Rotation, Transform};
use crate::decode::{Bitmap, FilterType};

/// Paint `source` onto a new raster described by `transform`.
///
/// # Errors
///
/// `NormalizeError::InvalidDimensions` for an empty source or transform, and
/// `NormalizeError::PixelMismatch` if the source buffer does not match its
/// declared dimensions.
pub fn paint(
    source: &Bitmap,
    transform: &Transform,
    filter: FilterType,
) -> Result<Bitmap, NormalizeError> {
    if source.width == 0 || source.height == 0 {
        return Err(NormalizeError::InvalidDimensions {
            width: source.width,
            height: source.height,
        });
    }
    if transform.width == 0 || transform.height == 0 {
        return Err(NormalizeError::InvalidDimensions {
            width: transform.width,
            height: transform.height,
        });
    }
    if source.pixels.len() != source.expected_len() {
        return Err(NormalizeError::PixelMismatch {
            expected: source.expected_len(),
            actual: source.pixels.len(),
        });
    }

    let scaled = scale(source, transform.source_dimensions(), filter)?;

    if transform.is_identity() {
        return Ok(scaled);
    }
    Ok(orient(&scaled, transform.rotation, transform.mirrored))
}

/// Resample to exact dimensions.
fn scale(source: &Bitmap, target: Dimensions, filter: FilterType) -> Result<Bitmap, NormalizeError> {
    if source.width == target.width && source.height == target.height {
        return Ok(source.clone());
    }

    let rgb = source.to_rgb_image().ok_or(NormalizeError::PixelMismatch {
        expected: source.expected_len(),
        actual: source.pixels.len(),
    })?;
    let resized = image::imageops::resize(&rgb, target.width, target.height, filter.to_image_filter());

    Ok(Bitmap::from_rgb_image(resized))
}

/// Rotate clockwise, then optionally mirror left to right.
fn orient(source: &Bitmap, rotation: Rotation, mirrored: bool) -> Bitmap {
    let (w, h) = (source.width as usize, source.height as usize);
    let (dst_w, dst_h) = if rotation.swaps_dimensions() {
        (h, w)
    } else {
        (w, h)
    };

    let mut output = vec![0u8; source.pixels.len()];

    for y in 0..h {
        for x in 0..w {
            let (rx, ry) = match rotation {
                Rotation::Deg0 => (x, y),
                Rotation::Deg90 => (h - 1 - y, x),
                Rotation::Deg180 => (w - 1 - x, h - 1 - y),
                Rotation::Deg270 => (y, w - 1 - x),
            };
            let dst_x = if mirrored { dst_w - 1 - rx } else { rx };

            let src_idx = (y * w + x) * 3;
            let dst_idx = (ry * dst_w + dst_x) * 3;
            output[dst_idx..dst_idx + 3].copy_from_slice(&source.pixels[src_idx..src_idx + 3]);
        }
    }

    Bitmap {
        width: dst_w as u32,
        height: dst_h as u32,
        pixels: output,
    }
}
