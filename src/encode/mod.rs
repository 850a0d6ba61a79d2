//! Output sinks.
//!
//! Sinks consume rendered frames in stream order and are fed by
//! [`StereogramDriver::render_range`](crate::StereogramDriver::render_range).

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
