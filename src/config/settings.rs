use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::core::{Fps, GridSize, Rgba8},
    foundation::error::{SirdsError, SirdsResult},
    shift::disparity::DEFAULT_SHIFT,
    shift::region::{ShiftRegion, border_frame},
};

/// Depth of the edge strips shifted by [`DepthLayout::default`].
pub const DEFAULT_BORDER: usize = 10;

/// Which rectangles get the disparity shift every frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthLayout {
    /// Four edge strips of the given depth, following the grid size.
    Border {
        /// Strip depth in cells.
        thickness: usize,
    },
    /// Explicit regions, applied in order.
    Regions(Vec<ShiftRegion>),
}

impl DepthLayout {
    /// Resolve to concrete regions for a grid.
    pub fn regions(&self, grid: GridSize) -> Vec<ShiftRegion> {
        match self {
            Self::Border { thickness } => border_frame(grid, *thickness).to_vec(),
            Self::Regions(regions) => regions.clone(),
        }
    }
}

impl Default for DepthLayout {
    fn default() -> Self {
        Self::Border {
            thickness: DEFAULT_BORDER,
        }
    }
}

/// Colours used when painting a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Canvas colour, visible wherever a cell holds no dot.
    pub background: Rgba8,
    /// Dot colour.
    pub dot: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 255],
            dot: [225, 225, 225, 255],
        }
    }
}

/// Everything needed to drive a stereogram animation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StereogramConfig {
    /// Dot-field size in cells.
    pub grid: GridSize,
    /// Edge length of one cell in pixels.
    pub dot_size: u32,
    /// Animation rate.
    pub fps: Fps,
    /// Disparity in cells.
    pub shift: usize,
    /// Shifted regions.
    pub depth: DepthLayout,
    /// Colours.
    pub palette: Palette,
    /// Fixed seed for a reproducible stream; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for StereogramConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            dot_size: 4,
            fps: Fps::default(),
            shift: DEFAULT_SHIFT,
            depth: DepthLayout::default(),
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl StereogramConfig {
    /// Parse a config from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> SirdsResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SirdsError::validation(format!("parse stereogram config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SirdsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SirdsError::validation(format!("open stereogram config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject configs that cannot be rendered.
    pub fn validate(&self) -> SirdsResult<()> {
        self.grid.validate()?;
        self.fps.validate()?;
        if self.dot_size == 0 {
            return Err(SirdsError::validation("dot_size must be > 0"));
        }
        if self.shift == 0 {
            return Err(SirdsError::validation("shift must be > 0"));
        }
        self.pixel_size()?;
        Ok(())
    }

    /// Regions to shift for this config's grid.
    pub fn regions(&self) -> Vec<ShiftRegion> {
        self.depth.regions(self.grid)
    }

    /// Pixel size `(width, height)` of the side-by-side canvas.
    pub fn pixel_size(&self) -> SirdsResult<(u32, u32)> {
        let px = |cells: usize, what: &str| {
            u32::try_from(cells)
                .ok()
                .and_then(|c| c.checked_mul(self.dot_size))
                .ok_or_else(|| SirdsError::validation(format!("{what} in pixels overflows u32")))
        };
        let image_width = px(self.grid.width, "image width")?;
        let height = px(self.grid.height, "image height")?;
        let width = image_width
            .checked_mul(2)
            .ok_or_else(|| SirdsError::validation("canvas width in pixels overflows u32"))?;
        Ok((width, height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
