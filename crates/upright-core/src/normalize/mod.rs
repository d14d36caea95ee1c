//! Frame normalization: make a decoded photo upright and fit it to a box.
//!
//! The pipeline is:
//! 1. Read the EXIF orientation with [`crate::scan`], falling back to identity
//! 2. Decode the pixels without applying any orientation
//! 3. Compute the scaled size with [`resize_target`]
//! 4. Map the orientation to a [`Transform`] and [`paint`] the bitmap
//!
//! [`normalize_jpeg`] runs all four steps; [`normalize_and_encode`] also
//! encodes the result for upload.

mod config;
mod dimensions;
mod orientation;
mod paint;
mod pipeline;
mod transform;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

pub use config::{ConfigError, NormalizeConfig};
pub use dimensions::{resize_target, Dimensions};
pub use orientation::{orientation_from_scan, orientation_or_identity, Orientation};
pub use paint::paint;
pub use pipeline::{
    encode_frame, normalize_and_encode, normalize_jpeg, normalize_with_orientation,
    NormalizedFrame,
};
pub use transform::{orientation_transform, Rotation, Transform};

/// Errors that can occur while normalizing a frame.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Orientation code outside 1-8.
    #[error("Invalid orientation code: {0}")]
    InvalidCode(i32),

    /// Zero-sized source or destination.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match width * height * 3.
    #[error("Pixel buffer mismatch: expected {expected} bytes, got {actual}")]
    PixelMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NormalizeError::InvalidCode(9).to_string(),
            "Invalid orientation code: 9"
        );
        assert_eq!(
            NormalizeError::InvalidDimensions {
                width: 0,
                height: 4
            }
            .to_string(),
            "Invalid dimensions: 0x4"
        );
    }

    #[test]
    fn test_errors_convert() {
        let err: NormalizeError = ConfigError::Invalid("bad".into()).into();
        assert!(matches!(err, NormalizeError::Config(_)));

        let err: NormalizeError = DecodeError::InvalidFormat.into();
        assert!(matches!(err, NormalizeError::Decode(_)));
    }
}
