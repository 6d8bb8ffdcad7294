//! Pipeline WASM bindings.
//!
//! Lets the UI describe a whole edit as plain JS objects and run it in one
//! call. The pipeline is validated before the first pixel changes, so a bad
//! step throws and leaves the image exactly as it was.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! apply_pipeline(image, [
//!   { op: 'grayscale' },
//!   { op: 'rotate' },
//!   { op: 'set_lightness', lightness: 0.6 },
//! ], { channel_ceiling: 255 });
//! ```

use crate::types::{to_js_error, JsFilterOverlays, JsPixelGrid};
use pixmill_core::{FilterOverlays, Operation, Pipeline, TransformConfig};
use wasm_bindgen::prelude::*;

/// Run a list of operations against `image`.
///
/// # Arguments
/// * `operations` - Array of `{ op: string, ...params }` objects
/// * `config` - Optional transform config; `undefined` or `null` uses defaults
///
/// # Errors
/// Throws if the operations or config cannot be deserialized, if a parameter
/// is out of range, or if the list contains a `filter` step (use
/// `apply_pipeline_with_overlays` for that).
#[wasm_bindgen]
pub fn apply_pipeline(
    image: &mut JsPixelGrid,
    operations: JsValue,
    config: JsValue,
) -> Result<(), JsValue> {
    let pipeline = parse_pipeline(operations, config)?;
    run_pipeline(image, &pipeline, None).map_err(to_js_error)
}

/// Run a list of operations that may include `filter` steps.
#[wasm_bindgen]
pub fn apply_pipeline_with_overlays(
    image: &mut JsPixelGrid,
    operations: JsValue,
    config: JsValue,
    overlays: &JsFilterOverlays,
) -> Result<(), JsValue> {
    let pipeline = parse_pipeline(operations, config)?;
    run_pipeline(image, &pipeline, Some(overlays.overlays())).map_err(to_js_error)
}

fn parse_pipeline(operations: JsValue, config: JsValue) -> Result<Pipeline, JsValue> {
    let operations: Vec<Operation> = serde_wasm_bindgen::from_value(operations)
        .map_err(|e| JsValue::from_str(&format!("Invalid operations: {}", e)))?;
    let config: Option<TransformConfig> = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
    Ok(Pipeline::new(operations).with_config(config.unwrap_or_default()))
}

/// Apply a parsed pipeline, replacing the wrapped grid on success.
fn run_pipeline(
    image: &mut JsPixelGrid,
    pipeline: &Pipeline,
    overlays: Option<&FilterOverlays>,
) -> Result<(), pixmill_core::TransformError> {
    pipeline.run(image.grid_mut(), overlays)
}
