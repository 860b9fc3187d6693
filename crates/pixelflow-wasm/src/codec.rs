//! Image codec WASM bindings.
//!
//! This module exposes the pixelflow-core decode/encode functions to
//! JavaScript. The editor decodes an uploaded file into a raster once,
//! applies any number of operations to it, and re-encodes the result for
//! download or preview.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_png } from '@pixelflow/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//!
//! const png = encode_png(image);
//! ```

use crate::types::JsRasterImage;
use pixelflow_core::codec;
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image from bytes.
///
/// The format is guessed from the content.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array`
///
/// # Errors
///
/// Returns an error if the format is not recognized or the file is
/// corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    codec::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image to PNG bytes.
///
/// PNG is lossless and keeps the alpha channel.
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    codec::encode_png(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image to JPEG bytes with the given quality (1-100).
///
/// JPEG has no alpha channel; transparency is dropped.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRasterImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    codec::encode_jpeg(&image.to_raster(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}
