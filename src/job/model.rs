use std::collections::BTreeMap;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{RasterError, RasterResult};
use crate::raster::buffer::check_size;

/// A declarative list of operations applied, in order, to one base image.
///
/// Jobs are plain JSON:
///
/// ```json
/// {
///   "canvas": { "width": 64, "height": 64, "rgba": [0, 0, 0, 255] },
///   "layers": { "logo": "logo.png" },
///   "steps": [
///     { "op": "overlay", "layer": "logo", "at": { "x": 8, "y": 8 }, "opacity": 0.5 },
///     { "op": "crop_center", "width": 32, "height": 32 }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    /// Solid background to start from when no base image is supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasSpec>,
    /// Layer key to image path, relative to the job file.
    #[serde(default)]
    pub layers: BTreeMap<String, String>,
    /// Operations, applied first to last.
    pub steps: Vec<Step>,
}

/// Solid-color starting image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasSpec {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fill color, non-premultiplied. Defaults to transparent black.
    #[serde(default)]
    pub rgba: [u8; 4],
}

/// One operation of a [`Job`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum Step {
    /// See [`crate::crop`].
    Crop {
        /// Region in the current image's coordinates.
        rect: Rect,
    },
    /// See [`crate::crop_center`].
    CropCenter {
        /// Output width.
        width: u32,
        /// Output height.
        height: u32,
    },
    /// See [`crate::crop_top`].
    CropTop {
        /// Output width.
        width: u32,
        /// Output height.
        height: u32,
    },
    /// See [`crate::paste`].
    Paste {
        /// Layer key.
        layer: String,
        /// Top-left of the layer on the current image.
        #[serde(default)]
        at: Point,
    },
    /// See [`crate::paste_center`].
    PasteCenter {
        /// Layer key.
        layer: String,
    },
    /// See [`crate::overlay`].
    Overlay {
        /// Layer key.
        layer: String,
        /// Top-left of the layer on the current image.
        #[serde(default)]
        at: Point,
        /// Layer opacity in `[0, 1]`.
        #[serde(default = "full_opacity")]
        opacity: f64,
    },
}

fn full_opacity() -> f64 {
    1.0
}

impl Step {
    /// Layer key this step draws, if any.
    pub fn layer(&self) -> Option<&str> {
        match self {
            Step::Paste { layer, .. } | Step::PasteCenter { layer } | Step::Overlay { layer, .. } => {
                Some(layer.as_str())
            }
            Step::Crop { .. } | Step::CropCenter { .. } | Step::CropTop { .. } => None,
        }
    }
}

impl Job {
    /// Parse a job from JSON text.
    pub fn from_json(text: &str) -> RasterResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> RasterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the job is runnable before touching any pixels.
    ///
    /// A canvas larger than [`crate::MAX_PIXELS`] is rejected here.
    pub fn validate(&self) -> RasterResult<()> {
        if self.steps.is_empty() {
            return Err(RasterError::job("job has no steps"));
        }
        if let Some(c) = self.canvas {
            check_size(c.width, c.height)
                .map_err(|e| RasterError::job(format!("canvas is too large: {e}")))?;
        }
        for (key, path) in &self.layers {
            if key.trim().is_empty() {
                return Err(RasterError::job("layer key must be non-empty"));
            }
            if path.trim().is_empty() {
                return Err(RasterError::job(format!("layer '{key}' has an empty path")));
            }
        }
        for (i, step) in self.steps.iter().enumerate() {
            if let Some(layer) = step.layer()
                && !self.layers.contains_key(layer)
            {
                return Err(RasterError::job(format!(
                    "step {i} references undeclared layer '{layer}'"
                )));
            }
            if let Step::Overlay { opacity, .. } = step
                && !opacity.is_finite()
            {
                return Err(RasterError::job(format!(
                    "step {i} opacity must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Layer keys in the order steps first use them, without repeats.
    pub fn layer_keys(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for key in self.steps.iter().filter_map(Step::layer) {
            if !out.contains(&key) {
                out.push(key);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/job/model.rs"]
mod tests;
