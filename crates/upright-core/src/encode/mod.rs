//! Raster encoding for upload.
//!
//! This module turns the normalized RGB raster into the byte buffer handed to
//! the transport layer:
//! - PNG (default, matches a browser canvas `toDataURL()`)
//! - JPEG with configurable quality
//!
//! # Examples
//!
//! ```ignore
//! use upright_core::encode::{encode_bitmap, OutputFormat};
//!
//! let encoded = encode_bitmap(&bitmap, OutputFormat::Jpeg { quality: 90 }).unwrap();
//! println!("Encoded {} bytes as {}", encoded.bytes.len(), encoded.mime_type);
//! ```

mod jpeg;
mod png;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::Bitmap;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

/// Errors that can occur while encoding a raster.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encoded format of the upload buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG.
    #[default]
    Png,
    /// JPEG at the given quality (1-100).
    Jpeg { quality: u8 },
}

impl OutputFormat {
    /// MIME type to send as the upload's content type.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg { .. } => "image/jpeg",
        }
    }
}

/// An encoded raster ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFrame {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Encode a bitmap in the requested format.
pub fn encode_bitmap(bitmap: &Bitmap, format: OutputFormat) -> Result<EncodedFrame, EncodeError> {
    let bytes = match format {
        OutputFormat::Png => encode_png(&bitmap.pixels, bitmap.width, bitmap.height)?,
        OutputFormat::Jpeg { quality } => {
            encode_jpeg(&bitmap.pixels, bitmap.width, bitmap.height, quality)?
        }
    };

    Ok(EncodedFrame {
        bytes,
        mime_type: format.mime_type(),
        width: bitmap.width,
        height: bitmap.height,
    })
}

/// Check that `pixels` is a non-empty RGB8 raster of `width` x `height`.
fn validate_raster(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}
