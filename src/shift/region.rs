use std::ops::Range;

use crate::foundation::core::GridSize;

/// Rectangle of grid cells, `(x, y)` being the top-left corner.
///
/// Coordinates are signed: a region may lie partly or wholly outside a field.
/// Non-positive extents describe an empty region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ShiftRegion {
    /// Left column.
    pub x: i64,
    /// Top row.
    pub y: i64,
    /// Extent in columns.
    pub width: i64,
    /// Extent in rows.
    pub height: i64,
}

impl ShiftRegion {
    /// Build a region from origin and extent.
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `true` when the rectangle covers no cells at all.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Intersect with a grid, returning `(rows, cols)` of the visible part.
    pub fn clip(&self, grid: GridSize) -> Option<(Range<usize>, Range<usize>)> {
        if self.is_empty() {
            return None;
        }
        let cols = clip_axis(self.x, self.width, grid.width)?;
        let rows = clip_axis(self.y, self.height, grid.height)?;
        Some((rows, cols))
    }
}

fn clip_axis(origin: i64, extent: i64, limit: usize) -> Option<Range<usize>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let start = origin.max(0);
    let end = origin.saturating_add(extent).min(limit);
    if start >= end {
        return None;
    }
    // Both bounds are within [0, limit] here.
    Some(start as usize..end as usize)
}

/// The four edge strips of a grid, `thickness` cells deep: left, right, top, bottom.
///
/// Shifting all four produces a rectangular frame floating at a different depth.
pub fn border_frame(grid: GridSize, thickness: usize) -> [ShiftRegion; 4] {
    let w = i64::try_from(grid.width).unwrap_or(i64::MAX);
    let h = i64::try_from(grid.height).unwrap_or(i64::MAX);
    let t = i64::try_from(thickness).unwrap_or(i64::MAX);
    [
        ShiftRegion::new(0, 0, t, h),
        ShiftRegion::new(w.saturating_sub(t), 0, t, h),
        ShiftRegion::new(0, 0, w, t),
        ShiftRegion::new(0, h.saturating_sub(t), w, t),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/shift/region.rs"]
mod tests;
