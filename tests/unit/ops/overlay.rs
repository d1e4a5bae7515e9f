use super::*;
use crate::raster::source::Placed;

const RED: Rgba8 = [255, 0, 0, 255];
const BLUE: Rgba8 = [0, 0, 255, 255];

#[test]
fn half_opacity_blue_over_red() {
    let bg = PixelBuffer::filled(4, 4, RED);
    let fg = PixelBuffer::filled(2, 2, BLUE);
    let out = overlay(&bg, &fg, Point::new(1, 1), 0.5);

    for y in 0..4 {
        for x in 0..4 {
            let inside = (1..3).contains(&x) && (1..3).contains(&y);
            let want = if inside { [127, 0, 127, 255] } else { RED };
            assert_eq!(out.pixel(x, y), Some(want), "pixel ({x},{y})");
        }
    }
}

#[test]
fn opacity_0_keeps_background() {
    let bg = PixelBuffer::filled(3, 3, [12, 34, 56, 200]);
    let fg = PixelBuffer::filled(3, 3, [250, 250, 250, 255]);
    assert_eq!(overlay(&bg, &fg, Point::ZERO, 0.0), bg);
}

#[test]
fn opacity_1_opaque_replaces_color() {
    let bg = PixelBuffer::filled(3, 3, [12, 34, 56, 90]);
    let fg = PixelBuffer::filled(2, 2, [1, 2, 3, 255]);
    let out = overlay(&bg, &fg, Point::new(1, 1), 1.0);
    assert_eq!(out.pixel(2, 2), Some([1, 2, 3, 255]));
    assert_eq!(out.pixel(0, 0), Some([12, 34, 56, 90]));
}

#[test]
fn opacity_is_clamped() {
    let bg = PixelBuffer::filled(2, 2, RED);
    let fg = PixelBuffer::filled(2, 2, BLUE);
    assert_eq!(
        overlay(&bg, &fg, Point::ZERO, 3.5),
        overlay(&bg, &fg, Point::ZERO, 1.0)
    );
    assert_eq!(overlay(&bg, &fg, Point::ZERO, -1.0), bg);
    assert_eq!(overlay(&bg, &fg, Point::ZERO, f64::NAN), bg);
}

#[test]
fn non_overlapping_is_clone() {
    let bg = PixelBuffer::filled(4, 4, RED);
    let fg = PixelBuffer::filled(2, 2, BLUE);
    assert_eq!(overlay(&bg, &fg, Point::new(10, 0), 1.0), bg);
    assert_eq!(overlay(&bg, &fg, Point::new(0, -2), 1.0), bg);
}

#[test]
fn position_is_in_background_space() {
    let bg = PixelBuffer::filled(4, 4, RED);
    let placed_bg = Placed::new(&bg, Point::new(-3, -3));
    let fg = PixelBuffer::filled(1, 1, BLUE);
    let out = overlay(&placed_bg, &fg, Point::new(-3, -2), 1.0);
    assert_eq!(out.pixel(0, 1), Some(BLUE));
    assert_eq!(out.pixel(0, 0), Some(RED));
}

#[test]
fn blend_both_transparent_zeroes_color() {
    assert_eq!(blend_over([9, 9, 9, 0], [7, 7, 7, 0], 1.0), [0, 0, 0, 0]);
}

#[test]
fn blend_onto_transparent_takes_source_color() {
    assert_eq!(
        blend_over([0, 0, 0, 0], [100, 110, 120, 200], 1.0),
        [100, 110, 120, 200]
    );
}

#[test]
fn blend_transparent_source_keeps_destination() {
    let dst = [10, 20, 30, 40];
    assert_eq!(blend_over(dst, [255, 255, 255, 0], 1.0), dst);
}

#[test]
fn blend_alpha_accumulates_and_truncates() {
    // a = 128 + 128 * 0.5 * 127 / 255 = 159.87...
    let out = blend_over([0, 0, 0, 128], [0, 0, 0, 128], 0.5);
    assert_eq!(out[3], 159);
}

#[test]
fn blend_colors_weighted_by_effective_alpha() {
    // coef2 = 0.5, coef1 = 0.5 * 128/255; normalized about 0.334 and 0.666
    let out = blend_over([90, 0, 0, 128], [0, 0, 240, 255], 0.5);
    assert_eq!(out, [30, 0, 159, 191]);
}

#[test]
fn opacity_0_on_transparent_destination_zeroes_color() {
    // Neither pixel carries weight, so the background color is not kept.
    assert_eq!(blend_over([12, 34, 56, 0], [9, 9, 9, 255], 0.0), [0, 0, 0, 0]);
}
