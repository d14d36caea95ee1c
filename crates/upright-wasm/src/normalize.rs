//! Frame normalization WASM bindings.
//!
//! # Functions
//!
//! - [`resize_target`] - Size a bitmap is scaled to before orienting
//! - [`orientation_transform`] - Rotation, mirror and destination size for a code
//! - [`normalize_jpeg`] - Decode, scale and orient a photo
//! - [`normalize_for_upload`] - Same as `normalize_jpeg`, encoded for upload
//!
//! Every `config` argument is a plain object:
//!
//! ```typescript
//! const config = {
//!   max_width: 1024,
//!   max_height: 768,
//!   filter: 'bilinear',              // optional: 'nearest' | 'bilinear' | 'lanczos3'
//!   output: { jpeg: { quality: 90 } } // optional, defaults to 'png'
//! };
//! ```
//!
//! # Example
//!
//! ```typescript
//! import { normalize_jpeg, normalize_for_upload } from '@upright/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const frame = normalize_jpeg(bytes, config);
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(frame.to_rgba()), frame.width), 0, 0);
//!
//! const body = normalize_for_upload(bytes, config);
//! await fetch(url, { method: 'POST', body, headers: { 'Content-Type': 'application/octet-stream' } });
//! ```

use crate::scan::fallback_reason;
use crate::types::{config_from_js, js_error, JsFrame};
use upright_core::normalize;
use wasm_bindgen::prelude::*;

/// Compute the `{ width, height }` a bitmap is scaled to before orienting.
///
/// # Errors
///
/// Returns an error if the config is invalid or either edge is zero.
#[wasm_bindgen]
pub fn resize_target(width: u32, height: u32, config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let target =
        normalize::resize_target(width, height, &config).map_err(|e| js_error(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&target).map_err(|e| js_error(&e.to_string()))
}

/// Map an orientation code to `{ rotation, mirrored, width, height }`.
///
/// `width` and `height` are the scaled, unrotated dimensions. Negative scan
/// sentinels must be replaced with 1 before calling.
///
/// # Errors
///
/// Returns an error for any code outside 1-8.
#[wasm_bindgen]
pub fn orientation_transform(code: i32, width: u32, height: u32) -> Result<JsValue, JsValue> {
    let transform = normalize::orientation_transform(code, width, height)
        .map_err(|e| js_error(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&transform).map_err(|e| js_error(&e.to_string()))
}

/// Decode a photo and return it upright, scaled to fit the configured box.
///
/// A missing or unreadable orientation is not an error: the frame is returned
/// unrotated and the reason is logged to the browser console.
///
/// # Errors
///
/// Returns an error if the config is invalid or the bytes cannot be decoded.
#[wasm_bindgen]
pub fn normalize_jpeg(bytes: &[u8], config: JsValue) -> Result<JsFrame, JsValue> {
    let config = config_from_js(config)?;
    let orientation = scanned_orientation(bytes);

    normalize::normalize_with_orientation(bytes, orientation, &config)
        .map(JsFrame::from)
        .map_err(|e| js_error(&e.to_string()))
}

/// Normalize a photo and encode it for upload.
///
/// The returned bytes are PNG unless `config.output` asks for JPEG, ready to
/// send as an `application/octet-stream` request body.
///
/// # Errors
///
/// Returns an error if the config is invalid, or decoding or encoding fails.
#[wasm_bindgen]
pub fn normalize_for_upload(bytes: &[u8], config: JsValue) -> Result<Vec<u8>, JsValue> {
    let config = config_from_js(config)?;
    let orientation = scanned_orientation(bytes);

    normalize::normalize_with_orientation(bytes, orientation, &config)
        .and_then(|frame| normalize::encode_frame(&frame, &config))
        .map(|encoded| encoded.bytes)
        .map_err(|e| js_error(&e.to_string()))
}

/// Scan once, reporting any identity fallback to the browser console.
fn scanned_orientation(bytes: &[u8]) -> normalize::Orientation {
    let scan = upright_core::scan_orientation(bytes);
    if let Some(reason) = fallback_reason(scan) {
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "Using identity orientation: {}",
            reason
        )));
    }
    normalize::orientation_from_scan(scan)
}
