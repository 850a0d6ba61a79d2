//! sirds generates animated single-image random-dot stereograms.
//!
//! Every frame draws a fresh random [`DotField`], keeps it as the reference image, then shifts
//! dots inside chosen [`ShiftRegion`]s a few cells to the left and refills the vacated columns
//! with new random dots. Shown side by side, the two fields fuse into a depth illusion: the
//! shifted regions float at a different depth from the rest.
//!
//! # Pipeline overview
//!
//! 1. **Draw**: [`DotField::new`] / [`DotField::randomize`] from a [`DotSource`]
//! 2. **Shift**: [`apply_shift`] over each region of the [`StereogramConfig`]
//! 3. **Paint**: [`StereoLayout::compose`] turns the pair into a [`FrameRGBA`]
//! 4. **Output**: a [`FrameSink`] (PNG sequence, `ffmpeg` MP4) or, with the `window`
//!    feature, a live window paced by [`FramePacer`]
//!
//! Grid cells and pixels are separate coordinate spaces. Fields and shifts only know cells;
//! the dot size is applied when painting.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod driver;
mod encode;
mod field;
mod foundation;
mod render;
mod shift;

/// Live display surfaces.
pub mod output;

pub use config::settings::{DEFAULT_BORDER, DepthLayout, Palette, StereogramConfig};
pub use driver::pacing::FramePacer;
pub use driver::stereogram::{RenderStats, StereoFrame, StereogramDriver};
pub use encode::ffmpeg::{
    FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, ffmpeg_command, is_ffmpeg_on_path,
    validate_sink_config,
};
pub use encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use field::dot_field::DotField;
pub use field::random::{DotRng, DotSource};
pub use foundation::core::{Fps, FrameIndex, FrameRange, GridSize, Rgba8};
pub use foundation::error::{SirdsError, SirdsResult};
pub use render::frame::{FrameRGBA, StereoLayout, paint_field};
pub use shift::disparity::{DEFAULT_SHIFT, apply_shift, apply_shifts};
pub use shift::region::{ShiftRegion, border_frame};
