//! End-to-end normalization of an uploaded photo.

use tracing::{debug, info, instrument};

use super::{
    orientation_or_identity, paint, resize_target, NormalizeConfig, NormalizeError, Orientation,
    Transform,
};
use crate::decode::{decode_bitmap, Bitmap};
use crate::encode::{encode_bitmap, EncodedFrame};

/// An upright, resized frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFrame {
    /// The painted raster.
    pub bitmap: Bitmap,
    /// Orientation that was applied (identity when none could be read).
    pub orientation: Orientation,
    /// Natural width of the decoded bitmap.
    pub source_width: u32,
    /// Natural height of the decoded bitmap.
    pub source_height: u32,
    /// The transform used to paint `bitmap`.
    pub transform: Transform,
}

/// Decode `bytes`, then scale and orient the bitmap so it is upright and fits
/// the configured box.
///
/// Metadata problems never fail this call: a missing, malformed, or
/// out-of-range orientation is treated as identity.
///
/// # Errors
///
/// `NormalizeError::Config` for an invalid config and `NormalizeError::Decode`
/// if the pixels cannot be decoded.
#[instrument(skip_all, fields(data_len = bytes.len()))]
pub fn normalize_jpeg(
    bytes: &[u8],
    config: &NormalizeConfig,
) -> Result<NormalizedFrame, NormalizeError> {
    normalize_with_orientation(bytes, orientation_or_identity(bytes), config)
}

/// [`normalize_jpeg`] with an orientation the caller already resolved.
///
/// Lets a caller that inspects the scan result itself avoid scanning twice.
#[instrument(skip_all, fields(orientation = orientation.code()))]
pub fn normalize_with_orientation(
    bytes: &[u8],
    orientation: Orientation,
    config: &NormalizeConfig,
) -> Result<NormalizedFrame, NormalizeError> {
    config.validate()?;

    let source = decode_bitmap(bytes)?;
    debug!(
        width = source.width,
        height = source.height,
        orientation = orientation.code(),
        "Decoded source bitmap"
    );

    let target = resize_target(source.width, source.height, config)?;
    let transform = Transform::for_orientation(orientation, target.width, target.height);
    let bitmap = paint(&source, &transform, config.filter)?;

    info!(
        source_width = source.width,
        source_height = source.height,
        width = bitmap.width,
        height = bitmap.height,
        orientation = orientation.code(),
        "Normalized frame"
    );

    Ok(NormalizedFrame {
        orientation,
        source_width: source.width,
        source_height: source.height,
        transform,
        bitmap,
    })
}

/// [`normalize_jpeg`] followed by encoding in `config.output`.
///
/// The returned bytes are ready to send as the body of an upload request.
#[instrument(skip_all, fields(data_len = bytes.len()))]
pub fn normalize_and_encode(
    bytes: &[u8],
    config: &NormalizeConfig,
) -> Result<EncodedFrame, NormalizeError> {
    let frame = normalize_jpeg(bytes, config)?;
    encode_frame(&frame, config)
}

/// Encode a normalized frame in `config.output`.
pub fn encode_frame(
    frame: &NormalizedFrame,
    config: &NormalizeConfig,
) -> Result<EncodedFrame, NormalizeError> {
    let encoded = encode_bitmap(&frame.bitmap, config.output)?;

    debug!(
        encoded_len = encoded.bytes.len(),
        mime_type = encoded.mime_type,
        "Encoded frame"
    );

    Ok(encoded)
}
