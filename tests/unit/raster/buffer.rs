use super::*;

fn gradient(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h);
    for y in 0..h {
        for x in 0..w {
            *buf.pixel_mut(x, y).unwrap() = [x as u8, y as u8, (x + y) as u8, 255];
        }
    }
    buf
}

#[test]
fn new_is_zeroed_and_compact() {
    let buf = PixelBuffer::new(3, 2);
    assert_eq!(buf.stride(), 12);
    assert_eq!(buf.pix().len(), 24);
    assert!(buf.is_compact());
    assert!(buf.pix().iter().all(|&b| b == 0));
}

#[test]
fn from_raw_rejects_short_stride_and_short_data() {
    assert!(PixelBuffer::from_raw(2, 2, 7, vec![0; 16]).is_err());
    assert!(PixelBuffer::from_raw(2, 2, 8, vec![0; 15]).is_err());
    assert!(PixelBuffer::from_raw(2, 2, 12, vec![0; 24]).is_ok());
}

#[test]
fn padded_rows_are_skipped_by_accessors() {
    // 2x2 with 4 bytes of padding per row.
    let pix = vec![
        1, 1, 1, 1, 2, 2, 2, 2, 9, 9, 9, 9, //
        3, 3, 3, 3, 4, 4, 4, 4, 9, 9, 9, 9,
    ];
    let buf = PixelBuffer::from_raw(2, 2, 12, pix).unwrap();
    assert!(!buf.is_compact());
    assert_eq!(buf.row(1), &[3, 3, 3, 3, 4, 4, 4, 4]);
    assert_eq!(buf.pixel(1, 0), Some([2, 2, 2, 2]));
    assert_eq!(
        buf.as_bytes_compact().as_ref(),
        &[1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4]
    );

    let img = buf.into_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 1).0, [3, 3, 3, 3]);
}

#[test]
fn pixel_outside_is_none() {
    let mut buf = PixelBuffer::new(2, 2);
    assert_eq!(buf.pixel(2, 0), None);
    assert!(buf.pixel_mut(0, 2).is_none());
}

#[test]
fn clone_region_clips_to_bounds() {
    let src = gradient(4, 4);
    let out = src.clone_region(Rect::new(2, 3, 10, 10));
    assert_eq!(out.size(), Size::new(2, 1));
    assert_eq!(out.pixel(0, 0), src.pixel(2, 3));
    assert_eq!(out.pixel(1, 0), src.pixel(3, 3));
}

#[test]
fn clone_region_outside_is_empty() {
    let src = gradient(4, 4);
    let out = src.clone_region(Rect::new(-5, -5, -1, -1));
    assert_eq!(out.size(), Size::new(0, 0));
    assert!(out.pix().is_empty());
}

#[test]
fn rgba_image_conversion_keeps_pixels() {
    let src = gradient(3, 2);
    let img: image::RgbaImage = src.clone().try_into().unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(PixelBuffer::from(img), src);
}

#[test]
#[should_panic]
fn row_span_past_row_end_panics() {
    let buf = PixelBuffer::new(2, 2);
    let _ = buf.row_span(0, 1, 2);
}

#[test]
fn try_filled_rejects_sizes_past_limit() {
    let err = PixelBuffer::try_filled(u32::MAX, u32::MAX, [1, 2, 3, 4]).unwrap_err();
    assert!(matches!(err, RasterError::Validation(_)));
    assert!(PixelBuffer::try_new(1 << 15, 1 << 14).is_err());

    let ok = PixelBuffer::try_filled(3, 2, [1, 2, 3, 4]).unwrap();
    assert_eq!(ok, PixelBuffer::filled(3, 2, [1, 2, 3, 4]));
    assert_eq!(PixelBuffer::try_new(0, 0).unwrap().size(), Size::new(0, 0));
}
