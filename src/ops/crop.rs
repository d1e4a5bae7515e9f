use crate::foundation::core::{Point, Rect, Size};
use crate::raster::buffer::PixelBuffer;
use crate::raster::source::ImageSource;

/// Cut `rect` (in `image`'s own coordinates) out of `image`.
///
/// The result is clipped to the part of `rect` that overlaps the image, so a request
/// that hangs over an edge yields a smaller buffer and one that misses entirely (or has
/// a negative size) yields a `0x0` buffer.
#[tracing::instrument(level = "trace", skip_all, fields(rect = ?rect))]
pub fn crop(image: &impl ImageSource, rect: Rect) -> PixelBuffer {
    let bounds = image.bounds();
    let local = rect.sub_point(bounds.min);
    let out = image.to_buffer().clone_region(local);
    if out.size() != rect.size() {
        tracing::debug!(
            requested = ?rect.size(),
            got = ?out.size(),
            "crop clipped to image bounds"
        );
    }
    out
}

/// Cut a `width`x`height` region around the center of `image`.
pub fn crop_center(image: &impl ImageSource, width: u32, height: u32) -> PixelBuffer {
    let bounds = image.bounds();
    let x0 = centered(bounds.min.x, bounds.width(), width);
    let y0 = centered(bounds.min.y, bounds.height(), height);
    crop(
        image,
        Rect::from_origin_size(Point::new(x0, y0), Size::new(width, height)),
    )
}

/// Cut a `width`x`height` region from the top edge of `image`, centered horizontally.
///
/// The top edge is the image's own `bounds().min.y`, which is not 0 for a [`Placed`]
/// image with a non-zero origin.
///
/// [`Placed`]: crate::Placed
pub fn crop_top(image: &impl ImageSource, width: u32, height: u32) -> PixelBuffer {
    let bounds = image.bounds();
    let x0 = centered(bounds.min.x, bounds.width(), width);
    crop(
        image,
        Rect::from_origin_size(Point::new(x0, bounds.min.y), Size::new(width, height)),
    )
}

/// Start coordinate that centers `inner` inside `[min, min + outer)`.
///
/// Both halves truncate independently: `min + outer/2 - inner/2`.
pub(crate) fn centered(min: i32, outer: u32, inner: u32) -> i32 {
    let v = i64::from(min) + i64::from(outer / 2) - i64::from(inner / 2);
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/ops/crop.rs"]
mod tests;
