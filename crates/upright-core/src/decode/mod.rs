//! Bitmap decoding for the normalization pipeline.
//!
//! This module turns encoded upload bytes into an RGB [`Bitmap`] with its
//! natural (sensor-order) width and height. It never looks at EXIF metadata;
//! orientation is read by [`crate::scan`] and applied by [`crate::normalize`].
//!
//! # Examples
//!
//! ```ignore
//! use upright_core::decode::decode_bitmap;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let bitmap = decode_bitmap(&bytes).unwrap();
//! println!("Decoded {}x{} bitmap", bitmap.width, bitmap.height);
//! ```

mod jpeg;
mod types;

pub use jpeg::decode_bitmap;
pub use types::{Bitmap, DecodeError, FilterType};
