use std::borrow::Cow;

use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::{RasterError, RasterResult};

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Largest pixel count the fallible constructors will allocate (1 GiB of RGBA8).
pub const MAX_PIXELS: u64 = 1 << 28;

/// Row-major, non-premultiplied RGBA8 pixel buffer whose origin is always `(0, 0)`.
///
/// Rows are `stride` bytes apart; only the first `width * 4` bytes of each row are pixels.
/// Buffers built by this crate are tightly packed (`stride == width * 4`), while
/// [`PixelBuffer::from_raw`] accepts padded rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    pix: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed (transparent black) buffer.
    ///
    /// # Panics
    ///
    /// Panics like `vec!` when the byte size overflows `usize`; use
    /// [`PixelBuffer::try_new`] for untrusted sizes.
    pub fn new(width: u32, height: u32) -> Self {
        let len = byte_len(width, height).unwrap_or(usize::MAX);
        Self {
            width,
            height,
            stride: row_bytes(width),
            pix: vec![0u8; len],
        }
    }

    /// Allocate a buffer with every pixel set to `rgba`.
    ///
    /// # Panics
    ///
    /// Same as [`PixelBuffer::new`]; use [`PixelBuffer::try_filled`] for untrusted sizes.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = (width as usize).checked_mul(height as usize).unwrap_or(usize::MAX);
        Self {
            width,
            height,
            stride: row_bytes(width),
            pix: rgba.repeat(pixels),
        }
    }

    /// [`PixelBuffer::new`] that rejects sizes above [`MAX_PIXELS`] instead of panicking.
    pub fn try_new(width: u32, height: u32) -> RasterResult<Self> {
        check_size(width, height)?;
        Ok(Self::new(width, height))
    }

    /// [`PixelBuffer::filled`] that rejects sizes above [`MAX_PIXELS`] instead of panicking.
    pub fn try_filled(width: u32, height: u32, rgba: [u8; 4]) -> RasterResult<Self> {
        check_size(width, height)?;
        Ok(Self::filled(width, height, rgba))
    }

    /// Wrap raw RGBA8 bytes, validating stride and length.
    pub fn from_raw(width: u32, height: u32, stride: usize, pix: Vec<u8>) -> RasterResult<Self> {
        let min_stride = (width as usize)
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or_else(|| RasterError::validation("pixel buffer row size overflow"))?;
        if stride < min_stride {
            return Err(RasterError::validation(format!(
                "stride {stride} is smaller than width*4 ({min_stride})"
            )));
        }
        let expected_len = stride
            .checked_mul(height as usize)
            .ok_or_else(|| RasterError::validation("pixel buffer size overflow"))?;
        if pix.len() < expected_len {
            return Err(RasterError::validation(format!(
                "pixel data has {} bytes, expected at least stride*height ({expected_len})",
                pix.len()
            )));
        }
        Ok(Self {
            width,
            height,
            stride,
            pix,
        })
    }

    /// Copy an `image` crate RGBA buffer.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            stride: row_bytes(width),
            pix: img.as_raw().clone(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes between the starts of two consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Width and height as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// `[0, 0] x [width, height]`.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size())
    }

    /// Raw bytes, including any row padding.
    pub fn pix(&self) -> &[u8] {
        &self.pix
    }

    /// `true` when rows carry no padding.
    pub fn is_compact(&self) -> bool {
        self.stride == row_bytes(self.width)
    }

    /// Byte offset of pixel `(x, y)`. Coordinates must be inside the buffer.
    pub fn pix_offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.stride + x as usize * BYTES_PER_PIXEL
    }

    /// Pixel bytes of row `y`, without padding.
    pub fn row(&self, y: u32) -> &[u8] {
        self.row_span(y, 0, self.width)
    }

    /// Mutable pixel bytes of row `y`, without padding.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let width = self.width;
        self.row_span_mut(y, 0, width)
    }

    /// Bytes of `len` pixels starting at `(x, y)`.
    ///
    /// Panics when the span leaves the row, like slice indexing does.
    pub fn row_span(&self, y: u32, x: u32, len: u32) -> &[u8] {
        let (start, end) = self.span_range(y, x, len);
        &self.pix[start..end]
    }

    /// Mutable bytes of `len` pixels starting at `(x, y)`.
    pub fn row_span_mut(&mut self, y: u32, x: u32, len: u32) -> &mut [u8] {
        let (start, end) = self.span_range(y, x, len);
        &mut self.pix[start..end]
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.pix_offset(x, y);
        let px = &self.pix[i..i + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Mutable pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.pix_offset(x, y);
        <&mut [u8; 4]>::try_from(&mut self.pix[i..i + BYTES_PER_PIXEL]).ok()
    }

    /// Copy the part of `rect` (buffer coordinates) that lies inside the buffer into a new,
    /// tightly packed, zero-origin buffer. Empty overlaps give a `0x0` buffer.
    pub fn clone_region(&self, rect: Rect) -> PixelBuffer {
        let r = self.bounds().intersect(rect);
        if r.is_empty() {
            return PixelBuffer::new(0, 0);
        }

        let (x0, y0) = (r.min.x as u32, r.min.y as u32);
        let mut out = PixelBuffer::new(r.width(), r.height());
        for row in 0..out.height {
            out.row_mut(row)
                .copy_from_slice(self.row_span(y0 + row, x0, r.width()));
        }
        out
    }

    /// Tightly packed RGBA bytes, borrowing when no repacking is needed.
    pub fn as_bytes_compact(&self) -> Cow<'_, [u8]> {
        let len = row_bytes(self.width) * self.height as usize;
        if self.is_compact() {
            return Cow::Borrowed(&self.pix[..len]);
        }
        let mut out = Vec::with_capacity(len);
        for y in 0..self.height {
            out.extend_from_slice(self.row(y));
        }
        Cow::Owned(out)
    }

    /// Hand the pixels to the `image` crate.
    pub fn into_rgba_image(self) -> RasterResult<image::RgbaImage> {
        let (width, height) = (self.width, self.height);
        let bytes = if self.is_compact() {
            let mut pix = self.pix;
            pix.truncate(row_bytes(width) * height as usize);
            pix
        } else {
            self.as_bytes_compact().into_owned()
        };
        image::RgbaImage::from_raw(width, height, bytes)
            .ok_or_else(|| RasterError::validation("pixel data does not match image dimensions"))
    }

    fn span_range(&self, y: u32, x: u32, len: u32) -> (usize, usize) {
        assert!(
            y < self.height && x.checked_add(len).is_some_and(|end| end <= self.width),
            "row span ({x}+{len}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        let start = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
        (start, start + len as usize * BYTES_PER_PIXEL)
    }
}

impl From<image::RgbaImage> for PixelBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            stride: row_bytes(width),
            pix: img.into_raw(),
        }
    }
}

impl TryFrom<PixelBuffer> for image::RgbaImage {
    type Error = RasterError;

    fn try_from(buf: PixelBuffer) -> RasterResult<Self> {
        buf.into_rgba_image()
    }
}

fn row_bytes(width: u32) -> usize {
    width as usize * BYTES_PER_PIXEL
}

fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

/// Reject `width`x`height` buffers above [`MAX_PIXELS`] or whose byte size overflows.
pub(crate) fn check_size(width: u32, height: u32) -> RasterResult<()> {
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_PIXELS || byte_len(width, height).is_none() {
        return Err(RasterError::validation(format!(
            "{width}x{height} exceeds the {MAX_PIXELS} pixel limit"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
