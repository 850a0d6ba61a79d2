use std::{
    io::Read as _,
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use crate::{
    encode::sink::{FrameSink, SinkConfig},
    foundation::core::{FrameIndex, Rgba8},
    foundation::error::{SirdsError, SirdsResult},
    render::frame::FrameRGBA,
};

/// Options for [`FfmpegSink`] MP4 output.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Background colour used to flatten translucent pixels.
    pub bg_rgba: Rgba8,
}

impl FfmpegSinkOpts {
    /// Create options for outputting an MP4 to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
        }
    }
}

/// Sink that spawns the system `ffmpeg` and streams raw RGBA frames to its stdin.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    /// Create a new sink that streams into `ffmpeg`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }
}

/// Check that a canvas can be encoded as yuv420p MP4.
pub fn validate_sink_config(cfg: &SinkConfig) -> SirdsResult<()> {
    cfg.fps.validate()?;
    if cfg.width == 0 || cfg.height == 0 {
        return Err(SirdsError::validation(
            "mp4 output needs a non-empty stereo canvas",
        ));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(SirdsError::validation(format!(
            "mp4 output needs an even canvas for yuv420p, got {}x{}",
            cfg.width, cfg.height
        )));
    }
    Ok(())
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> SirdsResult<()> {
        validate_sink_config(&cfg)?;

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(SirdsError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(SirdsError::encode(
                "`sirds render` pipes frames into ffmpeg; install it or use `sirds frames` for PNGs",
            ));
        }

        let mut child = ffmpeg_command(&self.opts, &cfg).spawn().map_err(|e| {
            SirdsError::encode(format!(
                "could not launch ffmpeg for '{}': {e}",
                self.opts.out_path.display()
            ))
        })?;

        let (Some(stdin), Some(mut stderr)) = (child.stdin.take(), child.stderr.take()) else {
            // Both are requested as pipes, so a spawned child always has them.
            let _ = child.kill();
            return Err(SirdsError::encode("ffmpeg started without piped stdin/stderr"));
        };
        let stderr_drain = std::thread::spawn(move || {
            let mut log = Vec::new();
            stderr.read_to_end(&mut log)?;
            Ok(log)
        });

        tracing::info!(
            out = %self.opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            "streaming stereogram frames to ffmpeg"
        );

        self.scratch = vec![0u8; cfg.width as usize * cfg.height as usize * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SirdsResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| SirdsError::encode("push_frame called before begin on the mp4 sink"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(SirdsError::encode(format!(
                "mp4 frames must arrive in increasing order: frame {} after {}",
                idx.0, last.0
            )));
        }
        self.last_idx = Some(idx);

        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(SirdsError::validation(format!(
                "stereo canvas is {}x{} but the mp4 was opened at {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != self.scratch.len() {
            return Err(SirdsError::validation(format!(
                "stereo canvas holds {} bytes, expected {}",
                frame.data.len(),
                self.scratch.len()
            )));
        }

        flatten_to_opaque_rgba8(&mut self.scratch, &frame.data, self.opts.bg_rgba)?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(SirdsError::encode("mp4 sink already closed"));
        };

        use std::io::Write as _;
        stdin.write_all(&self.scratch).map_err(|e| {
            SirdsError::encode(format!("ffmpeg stopped accepting frame {}: {e}", idx.0))
        })?;
        Ok(())
    }

    fn end(&mut self) -> SirdsResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| {
                SirdsError::encode("end called on an mp4 sink that was never started")
            })?;

        let status = child
            .wait()
            .map_err(|e| SirdsError::encode(format!("lost track of ffmpeg while finishing the mp4: {e}")))?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| SirdsError::encode("ffmpeg log reader panicked"))?
                .map_err(|e| SirdsError::encode(format!("could not read ffmpeg log: {e}")))?,
            None => Vec::new(),
        };

        if !status.success() {
            let log = String::from_utf8_lossy(&stderr_bytes);
            return Err(SirdsError::encode(format!(
                "ffmpeg could not write '{}' ({status}): {}",
                self.opts.out_path.display(),
                log.trim()
            )));
        }

        tracing::info!(out = %self.opts.out_path.display(), "mp4 finished");
        self.cfg = None;
        Ok(())
    }
}

/// `ffmpeg` invocation that reads `cfg`-sized raw RGBA frames from stdin and writes an
/// H.264 yuv420p MP4 to `opts.out_path`.
pub fn ffmpeg_command(opts: &FfmpegSinkOpts, cfg: &SinkConfig) -> Command {
    let mut cmd = Command::new("ffmpeg");
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .arg(if opts.overwrite { "-y" } else { "-n" })
        .args(["-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgba"])
        .arg("-s")
        .arg(format!("{}x{}", cfg.width, cfg.height))
        // input rate, must precede -i
        .arg("-r")
        .arg(format!("{}/{}", cfg.fps.num, cfg.fps.den))
        .args(["-i", "pipe:0", "-an", "-c:v", "libx264", "-pix_fmt", "yuv420p"])
        .args(["-movflags", "+faststart"])
        .arg(&opts.out_path);
    cmd
}

/// Composite straight-alpha RGBA8 over `bg_rgba`, producing opaque pixels.
fn flatten_to_opaque_rgba8(dst: &mut [u8], src: &[u8], bg_rgba: Rgba8) -> SirdsResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(SirdsError::validation(
            "flatten needs two rgba8 buffers of the same length",
        ));
    }

    let bg = [
        u16::from(bg_rgba[0]),
        u16::from(bg_rgba[1]),
        u16::from(bg_rgba[2]),
    ];

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;
        for i in 0..3 {
            let c = mul_div255(u16::from(s[i]), a) + mul_div255(bg[i], inv);
            d[i] = c.min(255) as u8;
        }
        d[3] = 255;
    }

    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> SirdsResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("could not create '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
