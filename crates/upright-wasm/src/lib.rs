//! Upright WASM - WebAssembly bindings for Upright
//!
//! This crate provides WASM bindings to expose the upright-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `scan` - EXIF orientation scanning
//! - `normalize` - Resize policy, orientation transforms and the full pipeline
//! - `types` - WASM-compatible wrapper types for normalized frames
//!
//! # Usage
//!
//! ```typescript
//! import init, { normalize_jpeg, scan_orientation } from '@upright/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! console.log(`EXIF orientation: ${scan_orientation(bytes)}`);
//!
//! const frame = normalize_jpeg(bytes, { max_width: 1024, max_height: 768 });
//! console.log(`Upright frame ${frame.width}x${frame.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod normalize;
mod scan;
mod types;

// Re-export public types
pub use normalize::{normalize_for_upload, normalize_jpeg, orientation_transform, resize_target};
pub use scan::scan_orientation;
pub use types::JsFrame;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
