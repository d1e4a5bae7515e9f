use std::ops::{Add, Sub};

/// Integer pixel coordinate.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Build a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Pixel dimensions of an image or region.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Build a size from its dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The size as a point offset, saturated into `i32`.
    pub fn to_point(self) -> Point {
        Point::new(sat_i32(self.width), sat_i32(self.height))
    }
}

/// Half-open integer rectangle `[min, max)`.
///
/// A rectangle whose `max` lies left of or above its `min` is empty; corners are
/// never swapped.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    /// Top-left corner (inclusive).
    pub min: Point,
    /// Bottom-right corner (exclusive).
    pub max: Point,
}

impl Rect {
    /// Build a rectangle from its corner coordinates.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Rectangle with top-left `origin` and the given size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            min: origin,
            max: origin + size.to_point(),
        }
    }

    /// Width in pixels, zero for inverted rectangles.
    pub fn width(self) -> u32 {
        span(self.min.x, self.max.x)
    }

    /// Height in pixels, zero for inverted rectangles.
    pub fn height(self) -> u32 {
        span(self.min.y, self.max.y)
    }

    /// Width and height as a [`Size`].
    pub fn size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// `true` when the rectangle contains no pixel.
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Largest rectangle contained in both, or [`Rect::default`] when they do not overlap.
    pub fn intersect(self, other: Rect) -> Rect {
        let r = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Rect::default() } else { r }
    }

    /// `true` when the two rectangles share at least one pixel.
    pub fn overlaps(self, other: Rect) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Shift both corners by `delta`.
    pub fn translate(self, delta: Point) -> Rect {
        Rect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Shift both corners by `-delta`.
    pub fn sub_point(self, delta: Point) -> Rect {
        Rect {
            min: self.min - delta,
            max: self.max - delta,
        }
    }
}

fn span(lo: i32, hi: i32) -> u32 {
    if hi <= lo {
        0
    } else {
        (i64::from(hi) - i64::from(lo)) as u32
    }
}

pub(crate) fn sat_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
