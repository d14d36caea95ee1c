//! EXIF orientation codes and the identity fallback policy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::transform::Rotation;
use super::NormalizeError;
use crate::scan::{scan_orientation, ScanError};

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Already upright.
    #[default]
    Normal = 1,
    /// Mirrored left to right.
    FlipHorizontal = 2,
    /// Upside down.
    Rotate180 = 3,
    /// Mirrored top to bottom.
    FlipVertical = 4,
    /// Rotate 90 CW, then mirror horizontally.
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90Cw = 6,
    /// Rotate 270 CW, then mirror horizontally.
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270Cw = 8,
}

impl Orientation {
    /// Every orientation, in code order.
    pub const ALL: [Orientation; 8] = [
        Orientation::Normal,
        Orientation::FlipHorizontal,
        Orientation::Rotate180,
        Orientation::FlipVertical,
        Orientation::Transpose,
        Orientation::Rotate90Cw,
        Orientation::Transverse,
        Orientation::Rotate270Cw,
    ];

    /// Convert a raw code. Anything outside 1-8 is `InvalidCode`, including
    /// the negative scan sentinels; clamping is the caller's decision.
    pub fn from_code(code: i32) -> Result<Self, NormalizeError> {
        match code {
            1 => Ok(Orientation::Normal),
            2 => Ok(Orientation::FlipHorizontal),
            3 => Ok(Orientation::Rotate180),
            4 => Ok(Orientation::FlipVertical),
            5 => Ok(Orientation::Transpose),
            6 => Ok(Orientation::Rotate90Cw),
            7 => Ok(Orientation::Transverse),
            8 => Ok(Orientation::Rotate270Cw),
            _ => Err(NormalizeError::InvalidCode(code)),
        }
    }

    /// The EXIF code for this orientation.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Clockwise rotation that makes the bitmap upright.
    pub fn rotation(self) -> Rotation {
        match self {
            Orientation::Normal | Orientation::FlipHorizontal => Rotation::Deg0,
            Orientation::Rotate180 | Orientation::FlipVertical => Rotation::Deg180,
            Orientation::Transpose | Orientation::Rotate90Cw => Rotation::Deg90,
            Orientation::Transverse | Orientation::Rotate270Cw => Rotation::Deg270,
        }
    }

    /// Whether a horizontal mirror follows the rotation.
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            Orientation::FlipHorizontal
                | Orientation::FlipVertical
                | Orientation::Transpose
                | Orientation::Transverse
        )
    }

    /// Returns true if this orientation swaps width and height dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        self.rotation().swaps_dimensions()
    }
}

impl TryFrom<i32> for Orientation {
    type Error = NormalizeError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Orientation::from_code(code)
    }
}

/// Apply the identity fallback to a scan result.
///
/// Missing metadata, non-JPEG input, malformed EXIF, and out-of-range codes all
/// become [`Orientation::Normal`], so the frame is still shown unrotated.
pub fn orientation_from_scan(result: Result<u16, ScanError>) -> Orientation {
    match result {
        Ok(code) => Orientation::from_code(i32::from(code)).unwrap_or_else(|_| {
            debug!(code, "Orientation code out of range, using identity");
            Orientation::Normal
        }),
        Err(reason) => {
            debug!(%reason, "No usable orientation, using identity");
            Orientation::Normal
        }
    }
}

/// Scan `bytes` and apply the identity fallback.
pub fn orientation_or_identity(bytes: &[u8]) -> Orientation {
    orientation_from_scan(scan_orientation(bytes))
}
