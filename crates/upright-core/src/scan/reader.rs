//! Bounds-checked multi-byte reads over a borrowed byte buffer.
//!
//! JPEG marker segments are always big-endian, while the TIFF structure inside
//! an EXIF block declares its own byte order. [`ByteView`] makes the byte order
//! explicit at every call site and turns any read past the end of the buffer
//! into [`ScanError::Malformed`] instead of a panic.

use super::ScanError;

/// Byte order of a multi-byte read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Most significant byte first ("MM" in a TIFF header).
    Big,
    /// Least significant byte first ("II" in a TIFF header).
    Little,
}

/// Immutable, randomly indexable view of a byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Total number of bytes in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow `N` bytes starting at `offset`.
    ///
    /// Fails with `Malformed` if the range overflows or ends past the buffer.
    fn array<const N: usize>(&self, offset: usize) -> Result<[u8; N], ScanError> {
        let malformed = || ScanError::Malformed {
            offset,
            len: self.bytes.len(),
        };
        let end = offset.checked_add(N).ok_or_else(malformed)?;
        let slice = self.bytes.get(offset..end).ok_or_else(malformed)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(slice);
        Ok(buf)
    }

    pub fn read_u16(&self, offset: usize, endian: Endian) -> Result<u16, ScanError> {
        let buf = self.array::<2>(offset)?;
        Ok(match endian {
            Endian::Big => u16::from_be_bytes(buf),
            Endian::Little => u16::from_le_bytes(buf),
        })
    }

    pub fn read_u32(&self, offset: usize, endian: Endian) -> Result<u32, ScanError> {
        let buf = self.array::<4>(offset)?;
        Ok(match endian {
            Endian::Big => u32::from_be_bytes(buf),
            Endian::Little => u32::from_le_bytes(buf),
        })
    }

    /// Fail with `Malformed` unless `needed` bytes are available at `offset`.
    pub fn require(&self, offset: usize, needed: usize) -> Result<(), ScanError> {
        match offset.checked_add(needed) {
            Some(end) if end <= self.bytes.len() => Ok(()),
            _ => Err(ScanError::Malformed {
                offset,
                len: self.bytes.len(),
            }),
        }
    }
}

/// Add two offsets, treating overflow as a malformed structure.
#[inline]
pub(crate) fn advance(offset: usize, by: usize, len: usize) -> Result<usize, ScanError> {
    offset
        .checked_add(by)
        .ok_or(ScanError::Malformed { offset, len })
}
