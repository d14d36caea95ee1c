//! Upright Core - photo orientation and normalization library
//!
//! This crate turns an uploaded photo into an upright, size-bounded raster:
//! EXIF orientation scanning, bitmap decoding, resize policy, orientation
//! transforms, painting, and encoding for upload.

pub mod decode;
pub mod encode;
pub mod normalize;
pub mod scan;

pub use decode::{decode_bitmap, Bitmap, DecodeError, FilterType};
pub use encode::{encode_bitmap, EncodeError, EncodedFrame, OutputFormat};
pub use normalize::{
    encode_frame, normalize_and_encode, normalize_jpeg, normalize_with_orientation,
    orientation_from_scan, orientation_or_identity, orientation_transform, paint, resize_target,
    ConfigError, Dimensions, NormalizeConfig, NormalizeError, NormalizedFrame,
    Orientation, Rotation, Transform,
};
pub use scan::{scan_orientation, ScanError};

/// Scan `bytes` and return the orientation in the integer encoding used by
/// browser callers: the raw tag value when one is found (normally 1-8, but
/// passed through unchecked), otherwise the negative [`ScanError::sentinel`]
/// value.
pub fn scan_orientation_code(bytes: &[u8]) -> i32 {
    match scan_orientation(bytes) {
        Ok(code) => i32::from(code),
        Err(e) => e.sentinel(),
    }
}
