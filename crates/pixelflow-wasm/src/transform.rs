//! WASM bindings for the image transform dispatcher.
//!
//! The editor UI builds an operation descriptor object and hands it across
//! the boundary; unknown operation kinds or filter names are rejected here
//! with an error, never silently ignored.

use crate::types::{resample_filter_from_u8, JsRasterImage};
use pixelflow_core::transform::{
    apply_operation as core_apply, apply_resize_with_filter, apply_rotation as core_rotate,
    TransformError,
};
use pixelflow_core::Operation;
use wasm_bindgen::prelude::*;

/// Apply an operation descriptor to an image.
///
/// # Arguments
///
/// * `image` - Source image; never mutated
/// * `op` - Operation descriptor object, e.g.
///   `{kind: "filter", filter: {name: "grayscale"}}`,
///   `{kind: "resize", scale_percent: 50}`, or
///   `{kind: "rotate", angle_degrees: 90}`
///
/// # Returns
///
/// A new `JsRasterImage`, or an error for an unrecognized descriptor or
/// invalid parameters.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const sepia = apply_operation(image, {kind: "filter", filter: {name: "sepia"}});
/// const half = apply_operation(image, {kind: "resize", scale_percent: 50});
/// ```
#[wasm_bindgen]
pub fn apply_operation(image: &JsRasterImage, op: JsValue) -> Result<JsRasterImage, JsValue> {
    let op: Operation = serde_wasm_bindgen::from_value(op)
        .map_err(|e| to_js_error(&TransformError::UnsupportedOperation(e.to_string())))?;

    let src = image.to_raster();
    core_apply(&src, &op)
        .map(JsRasterImage::from_raster)
        .map_err(|e| to_js_error(&e))
}

/// Rotate an image clockwise about its center by whole degrees.
///
/// The output canvas is always `height x width` - dimensions swap for
/// every angle, including 0 and 180.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = apply_rotation(sourceImage, 90);
/// ```
#[wasm_bindgen]
pub fn apply_rotation(image: &JsRasterImage, angle_degrees: i32) -> JsRasterImage {
    let src = image.to_raster();
    JsRasterImage::from_raster(core_rotate(&src, angle_degrees))
}

/// Resize an image by a percentage scale.
///
/// # Arguments
///
/// * `image` - Source image
/// * `scale_percent` - Percent scale; 100 leaves dimensions unchanged
/// * `filter` - Resampling filter (0 = nearest, 1 = bilinear, 2 = lanczos3)
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Half-size preview with bilinear resampling
/// const preview = resize(sourceImage, 50, 1);
/// ```
#[wasm_bindgen]
pub fn resize(
    image: &JsRasterImage,
    scale_percent: f64,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    let src = image.to_raster();
    apply_resize_with_filter(&src, scale_percent, resample_filter_from_u8(filter))
        .map(JsRasterImage::from_raster)
        .map_err(|e| to_js_error(&e))
}

fn to_js_error(err: &TransformError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
