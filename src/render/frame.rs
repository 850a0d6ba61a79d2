use std::path::Path;

use anyhow::Context as _;

use crate::{
    config::settings::{Palette, StereogramConfig},
    field::dot_field::DotField,
    foundation::core::{GridSize, Rgba8},
    foundation::error::{SirdsError, SirdsResult},
};

/// Straight RGBA8 pixel buffer, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// A frame filled with one colour.
    pub fn filled(width: u32, height: u32, rgba: Rgba8) -> Self {
        let n = width as usize * height as usize;
        let mut data = Vec::with_capacity(n * 4);
        for _ in 0..n {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Read one pixel, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Fill an axis-aligned square, clipped to the frame.
    pub fn fill_square(&mut self, x: u32, y: u32, size: u32, rgba: Rgba8) {
        let x_end = x.saturating_add(size).min(self.width);
        let y_end = y.saturating_add(size).min(self.height);
        let stride = self.width as usize * 4;
        for py in y..y_end {
            let row = py as usize * stride;
            for px in x..x_end {
                let i = row + px as usize * 4;
                self.data[i..i + 4].copy_from_slice(&rgba);
            }
        }
    }

    /// Pack into `0RGB` words for window surfaces (alpha dropped).
    pub fn to_argb_u32(&self) -> Vec<u32> {
        self.data
            .chunks_exact(4)
            .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
            .collect()
    }

    /// Write the frame as a PNG, creating parent directories.
    pub fn save_png(&self, path: &Path) -> SirdsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| SirdsError::encode(format!("write png '{}': {e}", path.display())))
    }
}

/// Paint every dot of `field` as a `dot_size` square, `x_offset` pixels from the left edge.
///
/// Cells without a dot are left as they are.
pub fn paint_field(
    frame: &mut FrameRGBA,
    field: &DotField,
    dot_size: u32,
    x_offset: u32,
    rgba: Rgba8,
) {
    for (row, col) in field.dots() {
        let x = (col as u32).saturating_mul(dot_size).saturating_add(x_offset);
        let y = (row as u32).saturating_mul(dot_size);
        frame.fill_square(x, y, dot_size, rgba);
    }
}

/// Pixel geometry of a reference/shifted image pair placed side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StereoLayout {
    /// Cells per image.
    pub grid: GridSize,
    /// Pixels per cell edge.
    pub dot_size: u32,
    image_width: u32,
    height: u32,
}

impl StereoLayout {
    /// Layout for a validated config.
    pub fn from_config(cfg: &StereogramConfig) -> SirdsResult<Self> {
        let (canvas_width, height) = cfg.pixel_size()?;
        Ok(Self {
            grid: cfg.grid,
            dot_size: cfg.dot_size,
            image_width: canvas_width / 2,
            height,
        })
    }

    /// Width of one image in pixels.
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// Width of the whole canvas in pixels.
    pub fn canvas_width(&self) -> u32 {
        self.image_width * 2
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Left edge of the shifted image; the reference sits at 0.
    pub fn shifted_offset(&self) -> u32 {
        self.image_width
    }

    /// Paint a reference/shifted pair onto a fresh canvas.
    pub fn compose(&self, reference: &DotField, shifted: &DotField, palette: &Palette) -> FrameRGBA {
        let mut frame = FrameRGBA::filled(self.canvas_width(), self.height, palette.background);
        paint_field(&mut frame, reference, self.dot_size, 0, palette.dot);
        paint_field(
            &mut frame,
            shifted,
            self.dot_size,
            self.shifted_offset(),
            palette.dot,
        );
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
