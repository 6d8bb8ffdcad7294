//! Pixmill WASM - WebAssembly bindings for Pixmill
//!
//! This crate provides WASM bindings to expose the pixmill-core transforms
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrappers for pixel grids and filter overlays
//! - `transform` - One binding per transform (grayscale, sepia, rotate, ...)
//! - `pipeline` - Run a JS-described list of operations in one call
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPixelGrid, sepia, rotate } from '@pixmill/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsPixelGrid(width, height, rgbBytes);
//! sepia(image);
//! const rotated = rotate(image);
//! ```

use wasm_bindgen::prelude::*;

mod pipeline;
mod transform;
mod types;

// Re-export public types
pub use pipeline::{apply_pipeline, apply_pipeline_with_overlays};
pub use transform::{
    apply_filter, bw_stylize, grayscale, invert, luminance_median, rotate, sepia, set_hue,
    set_lightness, set_saturation,
};
pub use types::{JsFilterOverlays, JsPixelGrid};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str(&format!(
        "pixmill-wasm {} loaded",
        version()
    )));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
