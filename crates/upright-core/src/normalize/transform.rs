//! Orientation-to-transform mapping.
//!
//! A [`Transform`] is applied in two steps: rotate the source clockwise by
//! `rotation`, then mirror the result left to right if `mirrored` is set.
//! `width` and `height` always describe the destination raster.

use serde::{Deserialize, Serialize};

use super::{Dimensions, NormalizeError, Orientation};

/// Clockwise rotation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// 90 and 270 degree turns exchange width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg0,
            Rotation::Deg90 => Rotation::Deg270,
            Rotation::Deg180 => Rotation::Deg180,
            Rotation::Deg270 => Rotation::Deg90,
        }
    }
}

/// How to paint a source bitmap onto a destination raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transform {
    /// Clockwise rotation applied first.
    pub rotation: Rotation,
    /// Horizontal mirror applied after the rotation.
    pub mirrored: bool,
    /// Destination width in pixels.
    pub width: u32,
    /// Destination height in pixels.
    pub height: u32,
}

impl Transform {
    /// Transform for an orientation applied to a `width` x `height` source.
    pub fn for_orientation(orientation: Orientation, width: u32, height: u32) -> Self {
        let rotation = orientation.rotation();
        let source = Dimensions::new(width, height);
        let dest = if rotation.swaps_dimensions() {
            source.transposed()
        } else {
            source
        };

        Self {
            rotation,
            mirrored: orientation.is_mirrored(),
            width: dest.width,
            height: dest.height,
        }
    }

    /// Destination dimensions.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Dimensions of the source this transform expects.
    pub fn source_dimensions(&self) -> Dimensions {
        if self.rotation.swaps_dimensions() {
            self.dimensions().transposed()
        } else {
            self.dimensions()
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotation == Rotation::Deg0 && !self.mirrored
    }

    /// The transform that maps this transform's output back to its source.
    ///
    /// Mirrored transforms are their own inverse: undoing "rotate r, then
    /// mirror" is "mirror, then rotate -r", which equals "rotate r, then mirror".
    pub fn inverse(&self) -> Self {
        let rotation = if self.mirrored {
            self.rotation
        } else {
            self.rotation.inverse()
        };
        let source = self.source_dimensions();

        Self {
            rotation,
            mirrored: self.mirrored,
            width: source.width,
            height: source.height,
        }
    }
}

/// Map an orientation code to the transform that makes a `width` x `height`
/// bitmap upright.
///
/// `width` and `height` are the scaled but not yet rotated dimensions (see
/// [`resize_target`](super::resize_target)). For codes that rotate by 90 or
/// 270 degrees the destination dimensions are swapped.
///
/// # Errors
///
/// `NormalizeError::InvalidCode` for any code outside 1-8. Scan sentinels must
/// be clamped by the caller first.
pub fn orientation_transform(
    code: i32,
    width: u32,
    height: u32,
) -> Result<Transform, NormalizeError> {
    let orientation = Orientation::from_code(code)?;
    Ok(Transform::for_orientation(orientation, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let t = orientation_transform(1, 100, 200).unwrap();
        assert_eq!(t.rotation, Rotation::Deg0);
        assert!(!t.mirrored);
        assert_eq!((t.width, t.height), (100, 200));
        assert!(t.is_identity());
    }

    #[test]
    fn test_rotate_90_swaps_dimensions() {
        let t = orientation_transform(6, 100, 200).unwrap();
        assert_eq!(t.rotation, Rotation::Deg90);
        assert!(!t.mirrored);
        assert_eq!((t.width, t.height), (200, 100));
    }

    #[test]
    fn test_full_table() {
        let expected = [
            (1, 0, false, (100, 200)),
            (2, 0, true, (100, 200)),
            (3, 180, false, (100, 200)),
            (4, 180, true, (100, 200)),
            (5, 90, true, (200, 100)),
            (6, 90, false, (200, 100)),
            (7, 270, true, (200, 100)),
            (8, 270, false, (200, 100)),
        ];

        for (code, degrees, mirrored, dims) in expected {
            let t = orientation_transform(code, 100, 200).unwrap();
            assert_eq!(t.rotation.degrees(), degrees, "code {code}");
            assert_eq!(t.mirrored, mirrored, "code {code}");
            assert_eq!((t.width, t.height), dims, "code {code}");
        }
    }

    #[test]
    fn test_rejects_out_of_range_codes() {
        assert!(matches!(
            orientation_transform(0, 10, 10),
            Err(NormalizeError::InvalidCode(0))
        ));
        assert!(matches!(
            orientation_transform(9, 10, 10),
            Err(NormalizeError::InvalidCode(9))
        ));
        assert!(matches!(
            orientation_transform(-1, 10, 10),
            Err(NormalizeError::InvalidCode(-1))
        ));
    }

    #[test]
    fn test_source_dimensions() {
        let t = orientation_transform(8, 30, 40).unwrap();
        assert_eq!(t.dimensions(), Dimensions::new(40, 30));
        assert_eq!(t.source_dimensions(), Dimensions::new(30, 40));
    }

    #[test]
    fn test_inverse_of_pure_rotations() {
        let t = orientation_transform(6, 30, 40).unwrap();
        let inv = t.inverse();
        assert_eq!(inv.rotation, Rotation::Deg270);
        assert!(!inv.mirrored);
        assert_eq!(inv.dimensions(), Dimensions::new(30, 40));

        let t = orientation_transform(3, 30, 40).unwrap();
        assert_eq!(t.inverse().rotation, Rotation::Deg180);
    }

    #[test]
    fn test_mirrored_transforms_are_involutions() {
        for code in [2, 4, 5, 7] {
            let t = orientation_transform(code, 30, 40).unwrap();
            let inv = t.inverse();
            assert_eq!(inv.rotation, t.rotation, "code {code}");
            assert!(inv.mirrored);
            assert_eq!(inv.inverse(), t, "code {code}");
        }
    }

    #[test]
    fn test_rotation_inverse() {
        for rotation in [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270] {
            let total = (rotation.degrees() + rotation.inverse().degrees()) % 360;
            assert_eq!(total, 0);
        }
    }
}
