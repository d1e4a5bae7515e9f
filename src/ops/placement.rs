use crate::foundation::core::{Point, Rect, Size};

/// Where a source image lands inside a destination, both in zero-origin buffer terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Top-left of the affected region in destination-local coordinates.
    pub dst_x: u32,
    /// See [`Placement::dst_x`].
    pub dst_y: u32,
    /// Top-left of the affected region in source-local coordinates.
    pub src_x: u32,
    /// See [`Placement::src_x`].
    pub src_y: u32,
    /// Extent of the affected region.
    pub size: Size,
}

/// Intersect `dst` with a `src_size` image whose top-left sits at `at` (in `dst`'s
/// coordinate space).
///
/// Returns `None` when nothing overlaps; callers treat that as a no-op.
pub fn place(dst: Rect, src_size: Size, at: Point) -> Option<Placement> {
    let paste = Rect::from_origin_size(at, src_size);
    let hit = dst.intersect(paste);
    if hit.is_empty() {
        return None;
    }

    Some(Placement {
        dst_x: offset(hit.min.x, dst.min.x),
        dst_y: offset(hit.min.y, dst.min.y),
        src_x: offset(hit.min.x, paste.min.x),
        src_y: offset(hit.min.y, paste.min.y),
        size: hit.size(),
    })
}

// `hi >= lo` holds for every corner of a non-empty intersection.
fn offset(hi: i32, lo: i32) -> u32 {
    (i64::from(hi) - i64::from(lo)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/ops/placement.rs"]
mod tests;
