use std::time::Duration;

use crate::foundation::error::{SirdsError, SirdsResult};

/// Straight (non-premultiplied) RGBA8 colour.
pub type Rgba8 = [u8; 4];

/// Zero-based index of an animation frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open range of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the range.
    pub start: FrameIndex,
    /// One past the last frame.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> SirdsResult<Self> {
        if start.0 > end.0 {
            return Err(SirdsError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// The first `count` frames of a stream.
    pub fn first(count: u64) -> Self {
        Self {
            start: FrameIndex(0),
            end: FrameIndex(count),
        }
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` lies inside the range.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds).
    pub den: u32, // must be > 0
}

impl Fps {
    /// Build a frame rate, rejecting a zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> SirdsResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Check the invariants enforced by [`Fps::new`].
    pub fn validate(self) -> SirdsResult<()> {
        if self.den == 0 {
            return Err(SirdsError::validation("Fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(SirdsError::validation("Fps num must be > 0"));
        }
        Ok(())
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Wall-clock budget of a single frame.
    pub fn frame_duration(self) -> Duration {
        Duration::from_nanos(u64::from(self.den) * 1_000_000_000 / u64::from(self.num.max(1)))
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Dimensions of a dot grid, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridSize {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
}

impl GridSize {
    /// Build a grid size, rejecting zero dimensions.
    pub fn new(width: usize, height: usize) -> SirdsResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Both dimensions must be positive.
    pub fn validate(self) -> SirdsResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SirdsError::validation(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.width * self.height
    }

    /// `true` when `(row, col)` addresses a cell of this grid.
    pub fn contains(self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: 120,
            height: 200,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
