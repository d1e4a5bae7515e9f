use crate::foundation::core::Point;
use crate::ops::placement::place;
use crate::raster::buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::raster::source::ImageSource;

/// Non-premultiplied RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Draw `overlay` over a clone of `background` with its top-left at `at`, blending each
/// overlapping pixel with [`blend_over`].
///
/// `opacity` scales the overlay's alpha and is clamped to `[0, 1]`; NaN counts as 0.
#[tracing::instrument(level = "trace", skip_all, fields(at = ?at, opacity = opacity))]
pub fn overlay(
    background: &impl ImageSource,
    overlay: &impl ImageSource,
    at: Point,
    opacity: f64,
) -> PixelBuffer {
    let opacity = clamp_opacity(opacity);
    let src = overlay.to_buffer();
    let mut dst = background.to_buffer().into_owned();
    let start = at - background.bounds().min;

    let Some(p) = place(dst.bounds(), src.size(), start) else {
        tracing::debug!(at = ?at, "overlay placement misses background");
        return dst;
    };

    for row in 0..p.size.height {
        let s_row = src.row_span(p.src_y + row, p.src_x, p.size.width);
        let d_row = dst.row_span_mut(p.dst_y + row, p.dst_x, p.size.width);
        for (d, s) in d_row
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(s_row.chunks_exact(BYTES_PER_PIXEL))
        {
            let out = blend_clamped([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
            d.copy_from_slice(&out);
        }
    }
    dst
}

/// Source-over blend of one non-premultiplied pixel `src` onto `dst`.
///
/// Channel results are truncated, not rounded. When neither pixel contributes any
/// weight the color channels come out as 0.
pub fn blend_over(dst: Rgba8, src: Rgba8, opacity: f64) -> Rgba8 {
    blend_clamped(dst, src, clamp_opacity(opacity))
}

fn blend_clamped(dst: Rgba8, src: Rgba8, opacity: f64) -> Rgba8 {
    let a1 = f64::from(dst[3]);
    let a2 = f64::from(src[3]);

    let mut coef2 = opacity * a2 / 255.0;
    let mut coef1 = (1.0 - coef2) * a1 / 255.0;
    let sum = coef1 + coef2;

    let mut out = [0u8; 4];
    if sum > 0.0 {
        coef1 /= sum;
        coef2 /= sum;
        for i in 0..3 {
            out[i] = (f64::from(dst[i]) * coef1 + f64::from(src[i]) * coef2) as u8;
        }
    }
    out[3] = (a1 + a2 * opacity * (255.0 - a1) / 255.0).min(255.0) as u8;
    out
}

fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() {
        return 0.0;
    }
    opacity.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/ops/overlay.rs"]
mod tests;
