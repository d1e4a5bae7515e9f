use std::borrow::Cow;

use crate::foundation::core::{Point, Rect, Size};
use crate::raster::buffer::PixelBuffer;

/// Anything the compositing operations can read pixels from.
///
/// `bounds` is the image in its own coordinate space, whose top-left corner may be
/// anywhere. `to_buffer` yields the same pixels normalized to a zero-origin
/// [`PixelBuffer`]; every coordinate computed against `bounds` must be translated by
/// `bounds().min` before it indexes that buffer.
pub trait ImageSource {
    /// Image rectangle in the source's own coordinates.
    fn bounds(&self) -> Rect;

    /// Pixels as a zero-origin RGBA8 buffer.
    fn to_buffer(&self) -> Cow<'_, PixelBuffer>;
}

impl ImageSource for PixelBuffer {
    fn bounds(&self) -> Rect {
        PixelBuffer::bounds(self)
    }

    fn to_buffer(&self) -> Cow<'_, PixelBuffer> {
        Cow::Borrowed(self)
    }
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn to_buffer(&self) -> Cow<'_, PixelBuffer> {
        (**self).to_buffer()
    }
}

impl ImageSource for image::RgbaImage {
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, Size::new(self.width(), self.height()))
    }

    fn to_buffer(&self) -> Cow<'_, PixelBuffer> {
        Cow::Owned(PixelBuffer::from_rgba_image(self))
    }
}

impl ImageSource for image::DynamicImage {
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, Size::new(self.width(), self.height()))
    }

    fn to_buffer(&self) -> Cow<'_, PixelBuffer> {
        Cow::Owned(PixelBuffer::from(self.to_rgba8()))
    }
}

/// An image positioned at `origin` in some larger coordinate space.
///
/// The pixels are untouched; only [`ImageSource::bounds`] moves.
#[derive(Clone, Copy, Debug)]
pub struct Placed<'a, T: ?Sized> {
    /// The image being positioned.
    pub image: &'a T,
    /// Where the image's top-left pixel sits.
    pub origin: Point,
}

impl<'a, T: ImageSource + ?Sized> Placed<'a, T> {
    /// Position `image` with its top-left pixel at `origin`.
    pub fn new(image: &'a T, origin: Point) -> Self {
        Self { image, origin }
    }
}

impl<T: ImageSource + ?Sized> ImageSource for Placed<'_, T> {
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.image.bounds().size())
    }

    fn to_buffer(&self) -> Cow<'_, PixelBuffer> {
        self.image.to_buffer()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/source.rs"]
mod tests;
