use std::path::PathBuf;

use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{SirdsError, SirdsResult},
    render::frame::FrameRGBA,
};

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in stream order.
///
/// `push_frame` is called in strictly increasing [`FrameIndex`] order between one `begin` and
/// one `end`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> SirdsResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SirdsResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> SirdsResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SirdsResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SirdsResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SirdsResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Writes each frame as `<dir>/<prefix>_<index:05>.png`.
#[derive(Debug, Clone)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing `frame_00000.png`, `frame_00001.png`, ... into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(dir, "frame")
    }

    /// Same as [`PngSequenceSink::new`] with a custom file name prefix.
    pub fn with_prefix(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
        }
    }

    /// Path used for a frame index.
    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:05}.png", self.prefix, idx.0))
    }

    /// Files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> SirdsResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(SirdsError::validation(
                "png sink width/height must be non-zero",
            ));
        }
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            SirdsError::encode(format!(
                "create output dir '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SirdsResult<()> {
        let path = self.path_for(idx);
        frame.save_png(&path)?;
        tracing::debug!(path = %path.display(), "wrote frame");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> SirdsResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
