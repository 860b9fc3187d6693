//! Pixelflow WASM - WebAssembly bindings for Pixelflow
//!
//! This crate provides WASM bindings to expose the pixelflow-core
//! functionality to the JavaScript/TypeScript editor.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `transform` - The image transform dispatcher (filters, resize, rotation)
//! - `codec` - Image decoding and encoding bindings (PNG, JPEG)
//! - `workflow` - Workflow save/load backed by localStorage
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_operation } from '@pixelflow/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const sepia = apply_operation(image, {kind: "filter", filter: {name: "sepia"}});
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod transform;
mod types;
mod workflow;

// Re-export public types
pub use codec::{decode_image, encode_jpeg, encode_png};
pub use transform::{apply_operation, apply_rotation, resize};
pub use types::JsRasterImage;
pub use workflow::{load_workflow, save_workflow, LocalStorageStore};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
