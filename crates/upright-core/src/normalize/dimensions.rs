//! Target raster size policy.

use serde::{Deserialize, Serialize};

use super::{NormalizeConfig, NormalizeError};

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Same dimensions with width and height exchanged.
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn fits_within(self, max_width: u32, max_height: u32) -> bool {
        self.width <= max_width && self.height <= max_height
    }
}

/// Compute the size a `width` x `height` bitmap is scaled to before orienting.
///
/// Bitmaps already inside `max_width` x `max_height` keep their size; larger
/// ones are scaled down by a single factor so the aspect ratio is preserved
/// and both edges fit. Each edge is rounded to the nearest integer and never
/// drops below 1.
///
/// Re-applying the policy to its own output returns that output unchanged.
///
/// # Errors
///
/// `NormalizeError::InvalidDimensions` if either input edge is zero, and
/// `NormalizeError::Config` if the configured maxima are invalid.
pub fn resize_target(
    width: u32,
    height: u32,
    config: &NormalizeConfig,
) -> Result<Dimensions, NormalizeError> {
    config.validate()?;

    if width == 0 || height == 0 {
        return Err(NormalizeError::InvalidDimensions { width, height });
    }

    let source = Dimensions::new(width, height);
    if source.fits_within(config.max_width, config.max_height) {
        return Ok(source);
    }

    let scale = (config.max_width as f64 / width as f64)
        .min(config.max_height as f64 / height as f64);

    let scaled_width = ((width as f64 * scale).round() as u32).clamp(1, config.max_width);
    let scaled_height = ((height as f64 * scale).round() as u32).clamp(1, config.max_height);

    Ok(Dimensions::new(scaled_width, scaled_height))
}
