//! Image transform operations: color filters, resize, and rotation.
//!
//! Every operation is a pure buffer-to-buffer function: it reads the source
//! image, allocates a fresh output buffer, and never mutates its input.
//! Either a fully valid output raster is produced or an error is returned
//! before any output is constructed.
//!
//! # Coordinate System
//!
//! - Pixel buffers are row-major RGBA with the origin at the top-left
//! - Rotation angles are in whole degrees, positive = clockwise

mod filter;
mod resize;
mod rotate;

pub use filter::apply_filter;
pub use resize::{apply_resize, apply_resize_with_filter, scaled_dimensions};
pub use rotate::apply_rotation;

use thiserror::Error;

use crate::{Operation, RasterImage};

/// Error types for image transform operations.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The scale percentage must be positive and finite.
    #[error("Invalid scale percentage: {0}")]
    InvalidScale(f64),

    /// The pixel buffer length does not match the image dimensions.
    #[error("Pixel buffer does not match image dimensions")]
    InvalidBuffer,

    /// The operation kind or filter sub-kind is not recognized.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Apply a single operation to an image, dispatching on the operation kind.
///
/// # Arguments
///
/// * `image` - Source image; never mutated
/// * `op` - The operation descriptor to apply
///
/// # Returns
///
/// A new `RasterImage`. Filters keep the input dimensions, resize scales
/// them by the requested percentage, and rotation swaps width and height.
///
/// # Errors
///
/// Returns `TransformError::InvalidScale` for a non-positive or non-finite
/// scale percentage, or `TransformError::InvalidBuffer` if the source pixel
/// buffer is inconsistent with its dimensions.
pub fn apply_operation(image: &RasterImage, op: &Operation) -> Result<RasterImage, TransformError> {
    if !image.is_consistent() {
        return Err(TransformError::InvalidBuffer);
    }

    match *op {
        Operation::Filter { filter } => Ok(apply_filter(image, filter)),
        Operation::Resize { scale_percent } => apply_resize(image, scale_percent),
        Operation::Rotate { angle_degrees } => Ok(apply_rotation(image, angle_degrees)),
    }
}
