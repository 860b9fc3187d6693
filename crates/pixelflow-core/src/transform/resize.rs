//! Percentage-based image resizing.
//!
//! Uses the `image` crate's resampling. The output dimension formula is the
//! hard contract; the resampling algorithm itself is selectable and
//! defaults to bilinear.

use super::TransformError;
use crate::{RasterImage, ResampleFilter};

/// Compute output dimensions for a percentage scale.
///
/// Each dimension is `round(dim * scale / 100)`, floored at 1 so a valid
/// image can always be produced.
pub fn scaled_dimensions(width: u32, height: u32, scale_percent: f64) -> (u32, u32) {
    let factor = scale_percent / 100.0;
    let new_width = (width as f64 * factor).round() as u32;
    let new_height = (height as f64 * factor).round() as u32;
    (new_width.max(1), new_height.max(1))
}

/// Resize an image by a percentage scale using the default bilinear filter.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `scale_percent` - Percent scale; 100 leaves dimensions unchanged
///
/// # Errors
///
/// Returns `TransformError::InvalidScale` if `scale_percent` is not a
/// positive finite number.
pub fn apply_resize(image: &RasterImage, scale_percent: f64) -> Result<RasterImage, TransformError> {
    apply_resize_with_filter(image, scale_percent, ResampleFilter::Bilinear)
}

/// Resize an image by a percentage scale with an explicit resampling filter.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `scale_percent` - Percent scale; 100 leaves dimensions unchanged
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `TransformError::InvalidScale` if `scale_percent` is not a
/// positive finite number, or `TransformError::InvalidBuffer` if the source
/// buffer cannot back an image of the declared dimensions.
pub fn apply_resize_with_filter(
    image: &RasterImage,
    scale_percent: f64,
    filter: ResampleFilter,
) -> Result<RasterImage, TransformError> {
    if !scale_percent.is_finite() || scale_percent <= 0.0 {
        return Err(TransformError::InvalidScale(scale_percent));
    }

    // Fast path: 100% keeps dimensions, just clone
    if scale_percent == 100.0 {
        return Ok(image.clone());
    }

    let (new_width, new_height) = scaled_dimensions(image.width, image.height, scale_percent);

    let rgba_image = image.to_rgba_image().ok_or(TransformError::InvalidBuffer)?;

    let resized =
        image::imageops::resize(&rgba_image, new_width, new_height, filter.to_image_filter());

    Ok(RasterImage::from_rgba_image(resized))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
