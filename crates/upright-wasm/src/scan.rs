//! EXIF orientation scanning bindings.

use upright_core::{scan_orientation_code, Orientation, ScanError};
use wasm_bindgen::prelude::*;

/// Read the EXIF orientation code of a JPEG.
///
/// Returns the raw code (normally 1-8), or a negative sentinel:
/// - `-1` - JPEG without an orientation tag
/// - `-2` - not a JPEG
/// - `-3` - truncated or malformed EXIF data
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const code = scan_orientation(bytes);
/// const upright = code >= 1 && code <= 8 ? code : 1;
/// ```
#[wasm_bindgen]
pub fn scan_orientation(bytes: &[u8]) -> i32 {
    scan_orientation_code(bytes)
}

/// Why a scan result leads to the identity orientation, if it does.
pub(crate) fn fallback_reason(scan: Result<u16, ScanError>) -> Option<String> {
    match scan {
        Ok(code) => Orientation::from_code(i32::from(code))
            .err()
            .map(|e| e.to_string()),
        Err(e) => Some(e.to_string()),
    }
}
