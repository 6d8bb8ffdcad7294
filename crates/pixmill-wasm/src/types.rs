//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Pixmill types,
//! handling the conversion between Rust and JavaScript data representations.

use pixmill_core::{FilterOverlays, PixelGrid, TransformError};
use wasm_bindgen::prelude::*;

/// A pixel grid wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. Keep images in WASM memory across
/// chained transforms and only extract pixels when needed.
#[wasm_bindgen]
pub struct JsPixelGrid {
    inner: PixelGrid,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a new JsPixelGrid from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Throws if `pixels.length != width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelGrid, JsValue> {
        PixelGrid::new(width, height, pixels)
            .map(Self::from_grid)
            .map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.as_raw().len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.as_raw().to_vec()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelGrid {
    pub(crate) fn from_grid(inner: PixelGrid) -> Self {
        Self { inner }
    }

    pub(crate) fn grid(&self) -> &PixelGrid {
        &self.inner
    }

    pub(crate) fn grid_mut(&mut self) -> &mut PixelGrid {
        &mut self.inner
    }
}

/// Halo and grain textures for the composite filter.
///
/// Decode both textures once and reuse this object for every filter call.
#[wasm_bindgen]
pub struct JsFilterOverlays {
    inner: FilterOverlays,
}

#[wasm_bindgen]
impl JsFilterOverlays {
    /// Pair a halo texture with a grain texture.
    ///
    /// # Errors
    /// Throws if the two textures differ in size.
    #[wasm_bindgen(constructor)]
    pub fn new(halo: &JsPixelGrid, grain: &JsPixelGrid) -> Result<JsFilterOverlays, JsValue> {
        FilterOverlays::new(halo.grid().clone(), grain.grid().clone())
            .map(Self::from_overlays)
            .map_err(to_js_error)
    }

    /// Width shared by both textures
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.dimensions().0
    }

    /// Height shared by both textures
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.dimensions().1
    }
}

impl JsFilterOverlays {
    pub(crate) fn from_overlays(inner: FilterOverlays) -> Self {
        Self { inner }
    }

    pub(crate) fn overlays(&self) -> &FilterOverlays {
        &self.inner
    }
}

/// Convert a core error into a JavaScript `Error`.
pub(crate) fn to_js_error(err: TransformError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
