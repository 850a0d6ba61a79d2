use crate::{
    config::settings::StereogramConfig,
    encode::sink::{FrameSink, SinkConfig},
    field::dot_field::DotField,
    field::random::{DotRng, DotSource},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{SirdsError, SirdsResult},
    render::frame::{FrameRGBA, StereoLayout},
    shift::disparity::apply_shifts,
    shift::region::ShiftRegion,
};

/// One animation tick: the untouched random field and its disparity-shifted copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StereoFrame {
    /// Position in the stream.
    pub index: FrameIndex,
    /// Field as drawn, shown on the left.
    pub reference: DotField,
    /// Field after every configured shift, shown on the right.
    pub shifted: DotField,
}

/// Counters returned by [`StereogramDriver::render_range`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames generated and discarded to reach the start of the range.
    pub frames_skipped: u64,
    /// Frames handed to the sink.
    pub frames_rendered: u64,
}

/// Produces a fresh stereogram every frame.
///
/// The only state carried from one frame to the next is the position of the dot stream; the
/// field buffer is redrawn in full at the start of each frame.
pub struct StereogramDriver<S: DotSource = DotRng> {
    config: StereogramConfig,
    layout: StereoLayout,
    regions: Vec<ShiftRegion>,
    dots: S,
    field: DotField,
    next: FrameIndex,
}

impl StereogramDriver<DotRng> {
    /// Driver drawing from a [`DotRng`] seeded by `config.seed`.
    pub fn from_config(config: StereogramConfig) -> SirdsResult<Self> {
        let dots = DotRng::from_seed(config.seed);
        Self::new(config, dots)
    }
}

impl<S: DotSource> StereogramDriver<S> {
    /// Driver drawing every dot from `dots`.
    pub fn new(config: StereogramConfig, dots: S) -> SirdsResult<Self> {
        config.validate()?;
        let layout = StereoLayout::from_config(&config)?;
        let regions = config.regions();
        let field = DotField::blank(config.grid.width, config.grid.height)?;
        tracing::debug!(
            grid = ?config.grid,
            regions = regions.len(),
            shift = config.shift,
            "stereogram driver ready"
        );
        Ok(Self {
            config,
            layout,
            regions,
            dots,
            field,
            next: FrameIndex(0),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &StereogramConfig {
        &self.config
    }

    /// Pixel layout of the composed canvas.
    pub fn layout(&self) -> StereoLayout {
        self.layout
    }

    /// Index the next call to [`StereogramDriver::next_frame`] will produce.
    pub fn next_index(&self) -> FrameIndex {
        self.next
    }

    /// Sink configuration matching this driver's canvas.
    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            width: self.layout.canvas_width(),
            height: self.layout.height(),
            fps: self.config.fps,
        }
    }

    /// Draw a new field and shift its configured regions.
    #[tracing::instrument(level = "trace", skip(self), fields(index = self.next.0))]
    pub fn next_frame(&mut self) -> SirdsResult<StereoFrame> {
        self.field.randomize(&mut self.dots);
        let reference = self.field.clone();
        apply_shifts(
            &mut self.field,
            &self.regions,
            self.config.shift,
            &mut self.dots,
        )?;

        let frame = StereoFrame {
            index: self.next,
            reference,
            shifted: self.field.clone(),
        };
        self.next = FrameIndex(self.next.0 + 1);
        Ok(frame)
    }

    /// Paint a frame's pair side by side.
    pub fn compose(&self, frame: &StereoFrame) -> FrameRGBA {
        self.layout
            .compose(&frame.reference, &frame.shifted, &self.config.palette)
    }

    /// [`StereogramDriver::next_frame`] followed by [`StereogramDriver::compose`].
    pub fn render_next(&mut self) -> SirdsResult<FrameRGBA> {
        let frame = self.next_frame()?;
        Ok(self.compose(&frame))
    }

    /// Advance the stream so the next frame produced is `target`.
    pub fn skip_to(&mut self, target: FrameIndex) -> SirdsResult<u64> {
        if target < self.next {
            return Err(SirdsError::validation(format!(
                "cannot rewind the dot stream from frame {} to frame {}",
                self.next.0, target.0
            )));
        }
        let mut skipped = 0;
        while self.next < target {
            self.next_frame()?;
            skipped += 1;
        }
        Ok(skipped)
    }

    /// Render `range` into `sink`, in increasing frame order.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> SirdsResult<RenderStats> {
        if range.is_empty() {
            return Err(SirdsError::validation("render range must be non-empty"));
        }

        let mut stats = RenderStats {
            frames_skipped: self.skip_to(range.start)?,
            ..RenderStats::default()
        };

        sink.begin(self.sink_config())?;
        while self.next < range.end {
            let idx = self.next;
            let frame = self.render_next()?;
            sink.push_frame(idx, &frame)?;
            stats.frames_rendered += 1;
        }
        sink.end()?;

        tracing::info!(
            rendered = stats.frames_rendered,
            skipped = stats.frames_skipped,
            "render finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/stereogram.rs"]
mod tests;
