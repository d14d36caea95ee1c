//! Forward scan over JPEG marker segments.

use tracing::{debug, trace};

use super::reader::{advance, ByteView, Endian};
use super::{
    ScanError, EXIF_SIGNATURE, IFD_ENTRY_SIZE, MARKER_APP1, MARKER_SOI, TAG_ORIENTATION,
    TIFF_LITTLE_ENDIAN,
};

/// Extract the EXIF orientation value from JPEG bytes.
///
/// The returned value is the raw SHORT stored in the first IFD0 entry tagged
/// 0x0112. Values outside 1-8 are returned as-is; rejecting them is the job of
/// [`Orientation::from_code`](crate::normalize::Orientation::from_code).
///
/// # Errors
///
/// - `ScanError::NotJpeg` if the buffer does not start with 0xFFD8
/// - `ScanError::NotFound` if no APP1/EXIF orientation entry precedes the
///   entropy-coded data, or the APP1 payload is not EXIF
/// - `ScanError::Malformed` if any read or declared segment length would fall
///   outside the buffer
pub fn scan_orientation(bytes: &[u8]) -> Result<u16, ScanError> {
    let view = ByteView::new(bytes);

    match view.read_u16(0, Endian::Big) {
        Ok(MARKER_SOI) => {}
        _ => return Err(ScanError::NotJpeg),
    }
    // SOI alone is a truncated stream, not a JPEG without metadata.
    view.require(2, 2)?;

    let len = view.len();
    let mut offset = 2usize;

    while offset < len {
        let marker = view.read_u16(offset, Endian::Big)?;
        offset += 2;

        if marker == MARKER_APP1 {
            return read_exif_orientation(&view, offset);
        }

        if marker & 0xFF00 != 0xFF00 {
            trace!(offset, marker, "Reached entropy-coded data");
            break;
        }

        let segment_len = view.read_u16(offset, Endian::Big)? as usize;
        if segment_len < 2 {
            // The length counts its own two bytes.
            return Err(ScanError::Malformed { offset, len });
        }
        // A segment may end exactly at the buffer end, never past it.
        view.require(offset, segment_len)?;
        trace!(offset, marker, segment_len, "Skipping marker segment");
        offset = advance(offset, segment_len, len)?;
    }

    Err(ScanError::NotFound)
}

/// Read the orientation from an APP1 payload.
///
/// `offset` points at the segment's length field.
fn read_exif_orientation(view: &ByteView<'_>, offset: usize) -> Result<u16, ScanError> {
    let len = view.len();

    let signature_at = advance(offset, 2, len)?;
    if view.read_u32(signature_at, Endian::Big)? != EXIF_SIGNATURE {
        debug!(offset = signature_at, "APP1 segment is not EXIF");
        return Err(ScanError::NotFound);
    }

    // "Exif\0\0" precedes the TIFF header.
    let tiff = advance(signature_at, 6, len)?;
    let endian = if view.read_u16(tiff, Endian::Big)? == TIFF_LITTLE_ENDIAN {
        Endian::Little
    } else {
        Endian::Big
    };

    let ifd_offset = view.read_u32(advance(tiff, 4, len)?, endian)? as usize;
    let ifd = advance(tiff, ifd_offset, len)?;
    let entry_count = view.read_u16(ifd, endian)? as usize;
    let entries = advance(ifd, 2, len)?;

    // A claimed entry count must fit in what is left of the buffer.
    view.require(entries, entry_count * IFD_ENTRY_SIZE)?;

    debug!(?endian, ifd, entry_count, "Found EXIF IFD0");

    for index in 0..entry_count {
        let entry = entries + index * IFD_ENTRY_SIZE;
        if view.read_u16(entry, endian)? == TAG_ORIENTATION {
            let value = view.read_u16(entry + 8, endian)?;
            debug!(index, value, "Found orientation tag");
            return Ok(value);
        }
    }

    Err(ScanError::NotFound)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::scan::fixtures::exif_jpeg_header;
    use proptest::prelude::*;

    proptest! {
        /// Property: arbitrary input never panics.
        #[test]
        fn prop_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let _ = scan_orientation(&bytes);
        }

        /// Property: arbitrary bytes after a valid SOI never panic.
        #[test]
        fn prop_never_panics_after_soi(tail in proptest::collection::vec(any::<u8>(), 0..512)) {
            let mut bytes = vec![0xFF, 0xD8];
            bytes.extend(tail);
            let _ = scan_orientation(&bytes);
        }

        /// Property: buffers shorter than 4 bytes are NotJpeg or Malformed.
        #[test]
        fn prop_short_buffers(bytes in proptest::collection::vec(any::<u8>(), 0..4)) {
            let result = scan_orientation(&bytes);
            let short_error = matches!(
                result,
                Err(ScanError::NotJpeg) | Err(ScanError::Malformed { .. })
            );
            prop_assert!(short_error, "unexpected result {:?}", result);
        }

        /// Property: anything without the SOI prefix is NotJpeg.
        #[test]
        fn prop_missing_soi(
            first in any::<u8>(),
            second in any::<u8>(),
            tail in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            prop_assume!(!(first == 0xFF && second == 0xD8));
            let mut bytes = vec![first, second];
            bytes.extend(tail);
            prop_assert_eq!(scan_orientation(&bytes), Err(ScanError::NotJpeg));
        }

        /// Property: every truncation inside the IFD entry is an error, never a panic.
        #[test]
        fn prop_truncation_is_error(value in 1u16..=8, cut in 0usize..34, little in any::<bool>()) {
            // The orientation entry ends at byte 34
            let endian = if little { Endian::Little } else { Endian::Big };
            let full = exif_jpeg_header(endian, value);
            prop_assert!(scan_orientation(&full[..cut]).is_err());
        }

        /// Property: the stored value is returned for both byte orders.
        #[test]
        fn prop_value_round_trips(value in any::<u16>(), little in any::<bool>()) {
            let endian = if little { Endian::Little } else { Endian::Big };
            prop_assert_eq!(scan_orientation(&exif_jpeg_header(endian, value)), Ok(value));
        }
    }
}
