//! WASM bindings for the individual transforms.
//!
//! Colour transforms rewrite the passed image in place; rotation returns a new
//! image. Parameter errors are thrown as JavaScript `Error`s before any pixel
//! changes.

use crate::types::{to_js_error, JsFilterOverlays, JsPixelGrid};
use pixmill_core::{TransformConfig, DEFAULT_CHANNEL_CEILING};
use wasm_bindgen::prelude::*;

/// Convert to grayscale (channel average).
#[wasm_bindgen]
pub fn grayscale(image: &mut JsPixelGrid) {
    pixmill_core::grayscale(image.grid_mut());
}

/// Invert every channel against 255.
#[wasm_bindgen]
pub fn invert(image: &mut JsPixelGrid) {
    pixmill_core::invert(image.grid_mut(), DEFAULT_CHANNEL_CEILING);
}

/// Apply the sepia tone.
#[wasm_bindgen]
pub fn sepia(image: &mut JsPixelGrid) {
    pixmill_core::sepia(image.grid_mut());
}

/// Two-tone black/white split at the median luminance.
#[wasm_bindgen]
pub fn bw_stylize(image: &mut JsPixelGrid) {
    pixmill_core::bw_stylize(image.grid_mut(), DEFAULT_CHANNEL_CEILING);
}

/// Rotate by a quarter turn.
///
/// # Returns
///
/// New `JsPixelGrid` with width and height swapped.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = rotate(sourceImage);
/// sourceImage.free();
/// ```
#[wasm_bindgen]
pub fn rotate(image: &JsPixelGrid) -> JsPixelGrid {
    JsPixelGrid::from_grid(pixmill_core::rotate_90(image.grid()))
}

/// Set every pixel's hue (degrees, 0 to 360 exclusive).
#[wasm_bindgen]
pub fn set_hue(image: &mut JsPixelGrid, hue: f64) -> Result<(), JsValue> {
    pixmill_core::set_hue(image.grid_mut(), hue).map_err(to_js_error)
}

/// Set every pixel's saturation (0 to 1).
#[wasm_bindgen]
pub fn set_saturation(image: &mut JsPixelGrid, saturation: f64) -> Result<(), JsValue> {
    pixmill_core::set_saturation(image.grid_mut(), saturation).map_err(to_js_error)
}

/// Set every pixel's lightness (0 to 1).
#[wasm_bindgen]
pub fn set_lightness(image: &mut JsPixelGrid, lightness: f64) -> Result<(), JsValue> {
    pixmill_core::set_lightness(image.grid_mut(), lightness).map_err(to_js_error)
}

/// Apply the warm + vignette + grain filter with default settings.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const overlays = new JsFilterOverlays(halo, grain);
/// apply_filter(image, overlays);
/// ```
#[wasm_bindgen]
pub fn apply_filter(image: &mut JsPixelGrid, overlays: &JsFilterOverlays) -> Result<(), JsValue> {
    pixmill_core::apply_filter(
        image.grid_mut(),
        overlays.overlays(),
        &TransformConfig::default(),
    )
    .map_err(to_js_error)
}

/// Median luminance of the image, the black/white threshold.
///
/// # Errors
/// Throws for an empty image.
#[wasm_bindgen]
pub fn luminance_median(image: &JsPixelGrid) -> Result<f64, JsValue> {
    pixmill_core::luminance_median(image.grid()).map_err(to_js_error)
}
