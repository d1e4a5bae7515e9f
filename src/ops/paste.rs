use crate::foundation::core::Point;
use crate::ops::crop::centered;
use crate::ops::placement::place;
use crate::raster::buffer::PixelBuffer;
use crate::raster::source::ImageSource;

/// Copy `overlay` onto a clone of `background` with its top-left at `at`
/// (in `background`'s coordinates).
///
/// Pixels in the overlap are replaced verbatim, alpha included. Everything else keeps
/// the background's value, and a placement that misses the background returns an
/// unchanged clone.
#[tracing::instrument(level = "trace", skip_all, fields(at = ?at))]
pub fn paste(background: &impl ImageSource, overlay: &impl ImageSource, at: Point) -> PixelBuffer {
    let src = overlay.to_buffer();
    let mut dst = background.to_buffer().into_owned();
    let start = at - background.bounds().min;

    let Some(p) = place(dst.bounds(), src.size(), start) else {
        tracing::debug!(at = ?at, "paste placement misses background");
        return dst;
    };

    for row in 0..p.size.height {
        dst.row_span_mut(p.dst_y + row, p.dst_x, p.size.width)
            .copy_from_slice(src.row_span(p.src_y + row, p.src_x, p.size.width));
    }
    dst
}

/// [`paste`] with `overlay` centered on `background`.
pub fn paste_center(background: &impl ImageSource, overlay: &impl ImageSource) -> PixelBuffer {
    let bg = background.bounds();
    let fg = overlay.bounds();
    let at = Point::new(
        centered(bg.min.x, bg.width(), fg.width()),
        centered(bg.min.y, bg.height(), fg.height()),
    );
    paste(background, overlay, at)
}

#[cfg(test)]
#[path = "../../tests/unit/ops/paste.rs"]
mod tests;
