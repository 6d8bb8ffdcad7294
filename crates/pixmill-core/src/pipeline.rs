//! Ordered sequences of transforms.
//!
//! A [`Pipeline`] is a serde-describable list of [`Operation`]s plus the
//! [`TransformConfig`] they share. The whole pipeline is validated up front:
//! every parameter, the config, and the overlay geometry each `filter` step
//! will see after any preceding rotations. Only then is the first operation
//! applied, so an invalid pipeline never leaves a half-transformed grid.
//!
//! # Wire Format
//!
//! ```text
//! [
//!   { "op": "grayscale" },
//!   { "op": "rotate" },
//!   { "op": "set_hue", "hue": 200.0 },
//!   { "op": "filter" }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::adjustments::{
    check_hue, check_lightness, check_saturation, grayscale, invert, sepia, set_hue,
    set_lightness, set_saturation,
};
use crate::error::TransformError;
use crate::filter::{apply_filter, FilterOverlays};
use crate::grid::PixelGrid;
use crate::stylize::bw_stylize;
use crate::transform::rotate_90;
use crate::TransformConfig;

/// A single transform step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Grayscale,
    Invert,
    Sepia,
    BwStylize,
    /// Quarter turn, swaps width and height
    Rotate,
    SetHue { hue: f64 },
    SetSaturation { saturation: f64 },
    SetLightness { lightness: f64 },
    /// Warm + vignette + grain, requires overlays
    Filter,
}

impl Operation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Grayscale => "grayscale",
            Operation::Invert => "invert",
            Operation::Sepia => "sepia",
            Operation::BwStylize => "bw_stylize",
            Operation::Rotate => "rotate",
            Operation::SetHue { .. } => "set_hue",
            Operation::SetSaturation { .. } => "set_saturation",
            Operation::SetLightness { .. } => "set_lightness",
            Operation::Filter => "filter",
        }
    }

    /// Returns true if this operation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self, Operation::Rotate)
    }

    /// Check this step's parameters against a grid of `dimensions`.
    pub fn validate(
        &self,
        dimensions: (u32, u32),
        overlays: Option<&FilterOverlays>,
    ) -> Result<(), TransformError> {
        match self {
            Operation::SetHue { hue } => check_hue(*hue),
            Operation::SetSaturation { saturation } => check_saturation(*saturation),
            Operation::SetLightness { lightness } => check_lightness(*lightness),
            Operation::Filter => overlays
                .ok_or(TransformError::MissingOverlays)?
                .check_fits(dimensions),
            Operation::Grayscale
            | Operation::Invert
            | Operation::Sepia
            | Operation::BwStylize
            | Operation::Rotate => Ok(()),
        }
    }

    /// Apply this step to `grid`.
    ///
    /// Rotation replaces the grid wholesale; every other step rewrites it in
    /// place. Validation happens inside each transform as well, so a single
    /// step can be applied safely on its own.
    pub fn apply(
        &self,
        grid: &mut PixelGrid,
        overlays: Option<&FilterOverlays>,
        config: &TransformConfig,
    ) -> Result<(), TransformError> {
        match self {
            Operation::Grayscale => grayscale(grid),
            Operation::Invert => invert(grid, config.channel_ceiling),
            Operation::Sepia => sepia(grid),
            Operation::BwStylize => bw_stylize(grid, config.channel_ceiling),
            Operation::Rotate => *grid = rotate_90(grid),
            Operation::SetHue { hue } => set_hue(grid, *hue)?,
            Operation::SetSaturation { saturation } => set_saturation(grid, *saturation)?,
            Operation::SetLightness { lightness } => set_lightness(grid, *lightness)?,
            Operation::Filter => {
                let overlays = overlays.ok_or(TransformError::MissingOverlays)?;
                apply_filter(grid, overlays, config)?;
            }
        }
        Ok(())
    }
}

/// An ordered list of operations sharing one config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub config: TransformConfig,
}

impl Pipeline {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self {
            operations,
            config: TransformConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    /// Append an operation, for chaining.
    pub fn then(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Geometry of a `width × height` image after the whole pipeline.
    pub fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        self.operations
            .iter()
            .fold((width, height), |(w, h), op| {
                if op.swaps_dimensions() {
                    (h, w)
                } else {
                    (w, h)
                }
            })
    }

    /// Validate the config and every step for a `width × height` input.
    pub fn validate(
        &self,
        width: u32,
        height: u32,
        overlays: Option<&FilterOverlays>,
    ) -> Result<(), TransformError> {
        self.config.validate()?;
        let mut dimensions = (width, height);
        for op in &self.operations {
            op.validate(dimensions, overlays)?;
            if op.swaps_dimensions() {
                dimensions = (dimensions.1, dimensions.0);
            }
        }
        Ok(())
    }

    /// Validate, then apply every operation in order.
    ///
    /// On error the grid is left exactly as it was passed in.
    #[instrument(skip_all, fields(width = grid.width(), height = grid.height(), steps = self.operations.len()))]
    pub fn run(
        &self,
        grid: &mut PixelGrid,
        overlays: Option<&FilterOverlays>,
    ) -> Result<(), TransformError> {
        self.validate(grid.width(), grid.height(), overlays)?;

        for op in &self.operations {
            debug!(op = op.name(), "Applying operation");
            op.apply(grid, overlays, &self.config)?;
        }

        info!(
            width = grid.width(),
            height = grid.height(),
            "Pipeline complete"
        );
        Ok(())
    }
}
