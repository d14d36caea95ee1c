//! WASM-compatible wrapper types for normalized frames.
//!
//! This module provides JavaScript-friendly types that wrap the core Upright
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use upright_core::{NormalizeConfig, NormalizedFrame};
use wasm_bindgen::prelude::*;

/// An upright, resized frame for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is
/// made to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsFrame {
    width: u32,
    height: u32,
    orientation: u8,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsFrame {
    /// Width of the upright frame in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the upright frame in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// EXIF orientation code that was applied (1 when none could be read)
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns the pixels as RGBA, ready for `new ImageData(...)`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for rgb in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(rgb);
            rgba.push(255);
        }
        rgba
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl From<NormalizedFrame> for JsFrame {
    fn from(frame: NormalizedFrame) -> Self {
        Self {
            width: frame.bitmap.width,
            height: frame.bitmap.height,
            orientation: frame.orientation.code(),
            pixels: frame.bitmap.pixels,
        }
    }
}

/// Wrap an error message in a JavaScript `Error`.
pub(crate) fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

/// Deserialize and validate a plain `{ max_width, max_height, ... }` object.
pub(crate) fn config_from_js(value: JsValue) -> Result<NormalizeConfig, JsValue> {
    let config: NormalizeConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_error(&format!("Invalid normalize config: {}", e)))?;
    config.validate().map_err(|e| js_error(&e.to_string()))?;
    Ok(config)
}
