use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sirds", version, about = "Animated random-dot stereograms")]
struct Cli {
    /// Maximum log level written to stderr.
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single stereogram frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Show the live animation in a window (requires the `window` feature).
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct StereoArgs {
    /// JSON config file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<usize>,

    /// Pixels per cell edge.
    #[arg(long)]
    dot_size: Option<u32>,

    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Disparity in cells.
    #[arg(long)]
    shift: Option<usize>,

    /// Shift a border frame this many cells deep instead of the configured regions.
    #[arg(long)]
    border: Option<usize>,

    /// Seed for a reproducible dot stream.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    stereo: StereoArgs,

    /// Frame index (0-based) within the dot stream.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    stereo: StereoArgs,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames to write.
    #[arg(long, default_value_t = 30)]
    count: u64,

    /// File name prefix.
    #[arg(long, default_value = "frame")]
    prefix: String,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    stereo: StereoArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames to encode.
    #[arg(long, default_value_t = 300)]
    count: u64,

    /// Fail instead of replacing an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    #[command(flatten)]
    stereo: StereoArgs,
}

impl StereoArgs {
    fn resolve(&self) -> anyhow::Result<sirds::StereogramConfig> {
        let mut cfg = match &self.config {
            Some(path) => sirds::StereogramConfig::from_path(path)?,
            None => sirds::StereogramConfig::default(),
        };
        if let Some(width) = self.width {
            cfg.grid.width = width;
        }
        if let Some(height) = self.height {
            cfg.grid.height = height;
        }
        if let Some(dot_size) = self.dot_size {
            cfg.dot_size = dot_size;
        }
        if let Some(fps) = self.fps {
            cfg.fps = sirds::Fps::new(fps, 1)?;
        }
        if let Some(shift) = self.shift {
            cfg.shift = shift;
        }
        if let Some(thickness) = self.border {
            cfg.depth = sirds::DepthLayout::Border { thickness };
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        cfg.validate().context("invalid stereogram config")?;
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
        Command::Show(args) => cmd_show(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut driver = sirds::StereogramDriver::from_config(args.stereo.resolve()?)?;
    driver.skip_to(sirds::FrameIndex(args.frame))?;
    let frame = driver.render_next()?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut driver = sirds::StereogramDriver::from_config(args.stereo.resolve()?)?;
    let mut sink = sirds::PngSequenceSink::with_prefix(&args.out_dir, args.prefix);
    let stats = driver.render_range(sirds::FrameRange::first(args.count), &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = args.stereo.resolve()?;
    let opts = sirds::FfmpegSinkOpts {
        out_path: args.out.clone(),
        overwrite: !args.no_overwrite,
        bg_rgba: cfg.palette.background,
    };
    let mut driver = sirds::StereogramDriver::from_config(cfg)?;
    let mut sink = sirds::FfmpegSink::new(opts);
    driver
        .render_range(sirds::FrameRange::first(args.count), &mut sink)
        .with_context(|| format!("render '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

#[cfg(feature = "window")]
fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let mut driver = sirds::StereogramDriver::from_config(args.stereo.resolve()?)?;
    sirds::output::window::run_window(&mut driver)?;
    Ok(())
}

#[cfg(not(feature = "window"))]
fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    args.stereo.resolve()?;
    anyhow::bail!("`show` needs a build with `--features window`")
}
