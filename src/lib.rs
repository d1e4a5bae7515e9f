//! rasterkit crops, pastes and alpha-composites RGBA8 raster images in memory.
//!
//! Every operation reads its inputs through [`ImageSource`] and returns a freshly
//! allocated [`PixelBuffer`]; caller-owned images are never mutated.
//!
//! # Coordinates
//!
//! An [`ImageSource`] reports its [`bounds`](ImageSource::bounds) in its own
//! coordinate space, which need not start at `(0, 0)` (see [`Placed`]). Rectangles
//! and points passed to [`crop`], [`paste`] and [`overlay`] are expressed in that
//! space. Results always have their origin at `(0, 0)`.
//!
//! # Pixels
//!
//! Pixels are non-premultiplied RGBA, 8 bits per channel. [`overlay`] blends with
//! source-over compositing in `f64` and truncates each channel, so results are
//! bit-exact across platforms.
//!
//! # Jobs
//!
//! A [`Job`] is a JSON list of steps applied to one image; [`run_job`] executes it
//! against images the caller has already decoded.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod job;
mod ops;
mod raster;

pub use foundation::core::{Point, Rect, Size};
pub use foundation::error::{RasterError, RasterResult};
pub use job::model::{CanvasSpec, Job, Step};
pub use job::run::run_job;
pub use ops::crop::{crop, crop_center, crop_top};
pub use ops::overlay::{Rgba8, blend_over, overlay};
pub use ops::paste::{paste, paste_center};
pub use ops::placement::{Placement, place};
pub use raster::buffer::{BYTES_PER_PIXEL, MAX_PIXELS, PixelBuffer};
pub use raster::source::{ImageSource, Placed};
