use std::collections::BTreeMap;

use crate::foundation::error::{RasterError, RasterResult};
use crate::job::model::{Job, Step};
use crate::ops::crop::{crop, crop_center, crop_top};
use crate::ops::overlay::overlay;
use crate::ops::paste::{paste, paste_center};
use crate::raster::buffer::PixelBuffer;

/// Run `job` starting from `base`, or from the job's canvas when `base` is `None`.
///
/// `layers` holds the decoded images for the job's layer keys. No IO happens here; the
/// caller front-loads every image the job needs.
#[tracing::instrument(level = "debug", skip_all, fields(steps = job.steps.len()))]
pub fn run_job(
    job: &Job,
    base: Option<PixelBuffer>,
    layers: &BTreeMap<String, PixelBuffer>,
) -> RasterResult<PixelBuffer> {
    job.validate()?;

    let mut img = match (base, job.canvas) {
        (Some(_), Some(_)) => {
            return Err(RasterError::job(
                "job defines a canvas and a base image was also supplied",
            ));
        }
        (Some(base), None) => base,
        (None, Some(c)) => PixelBuffer::try_filled(c.width, c.height, c.rgba)?,
        (None, None) => {
            return Err(RasterError::job(
                "job needs either a canvas or a base image",
            ));
        }
    };

    for (i, step) in job.steps.iter().enumerate() {
        img = apply_step(&img, step, layers)?;
        tracing::debug!(
            step = i,
            width = img.width(),
            height = img.height(),
            "applied step"
        );
    }
    Ok(img)
}

fn apply_step(
    img: &PixelBuffer,
    step: &Step,
    layers: &BTreeMap<String, PixelBuffer>,
) -> RasterResult<PixelBuffer> {
    let out = match step {
        Step::Crop { rect } => crop(img, *rect),
        Step::CropCenter { width, height } => crop_center(img, *width, *height),
        Step::CropTop { width, height } => crop_top(img, *width, *height),
        Step::Paste { layer, at } => paste(img, lookup(layers, layer)?, *at),
        Step::PasteCenter { layer } => paste_center(img, lookup(layers, layer)?),
        Step::Overlay { layer, at, opacity } => {
            overlay(img, lookup(layers, layer)?, *at, *opacity)
        }
    };
    Ok(out)
}

fn lookup<'a>(
    layers: &'a BTreeMap<String, PixelBuffer>,
    key: &str,
) -> RasterResult<&'a PixelBuffer> {
    layers
        .get(key)
        .ok_or_else(|| RasterError::job(format!("layer '{key}' was not loaded")))
}

#[cfg(test)]
#[path = "../../tests/unit/job/run.rs"]
mod tests;
