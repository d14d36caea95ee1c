//! JPEG marker-segment scanning for the EXIF orientation tag.
//!
//! This module walks a JPEG byte stream segment by segment until it reaches the
//! APP1 segment carrying an EXIF block, then reads the TIFF header and the first
//! Image File Directory (IFD0) looking for the orientation tag (0x0112).
//!
//! # Outcomes
//!
//! - `Ok(code)` - the raw orientation value of the first matching IFD0 entry
//! - `Err(ScanError::NotJpeg)` - the buffer does not start with the SOI marker
//! - `Err(ScanError::NotFound)` - a JPEG without a usable orientation tag
//! - `Err(ScanError::Malformed { .. })` - an offset or length points outside the buffer
//!
//! None of these outcomes are fatal to the caller. The usual policy is to fall
//! back to the identity orientation; see
//! [`orientation_or_identity`](crate::normalize::orientation_or_identity).
//!
//! Only IFD0 is searched. Thumbnail IFDs and the EXIF sub-IFD are never followed.

mod marker;
mod reader;

use thiserror::Error;

pub use marker::scan_orientation;
pub use reader::{ByteView, Endian};

/// JPEG start-of-image marker.
pub const MARKER_SOI: u16 = 0xFFD8;
/// JPEG APP1 marker (EXIF / XMP payloads).
pub const MARKER_APP1: u16 = 0xFFE1;
/// "Exif" as a big-endian u32.
pub const EXIF_SIGNATURE: u32 = 0x4578_6966;
/// "II" byte-order mark of a little-endian TIFF header.
pub const TIFF_LITTLE_ENDIAN: u16 = 0x4949;
/// EXIF orientation tag id.
pub const TAG_ORIENTATION: u16 = 0x0112;
/// Width of one IFD entry in bytes.
pub const IFD_ENTRY_SIZE: usize = 12;

/// Reasons a buffer yields no orientation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Missing or incorrect start-of-image signature.
    #[error("Not a JPEG: missing start-of-image marker")]
    NotJpeg,

    /// Well-formed JPEG without an EXIF orientation tag.
    #[error("No EXIF orientation tag found")]
    NotFound,

    /// An offset or length points outside the buffer.
    #[error("Malformed JPEG/EXIF structure at offset {offset} (buffer is {len} bytes)")]
    Malformed { offset: usize, len: usize },
}

impl ScanError {
    /// Legacy integer encoding used by browser callers.
    ///
    /// `NotFound` is -1 and `NotJpeg` is -2; `Malformed` is reported as -3.
    pub fn sentinel(self) -> i32 {
        match self {
            ScanError::NotFound => -1,
            ScanError::NotJpeg => -2,
            ScanError::Malformed { .. } => -3,
        }
    }
}
