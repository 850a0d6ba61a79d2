use std::time::Instant;

use minifb::{Key, Window, WindowOptions};

use crate::{
    driver::pacing::FramePacer,
    driver::stereogram::StereogramDriver,
    field::random::DotSource,
    foundation::error::{SirdsError, SirdsResult},
};

/// Title of the live window.
pub const WINDOW_TITLE: &str = "rd stereogram";

/// Show the animation in a window until it is closed or Escape is pressed.
///
/// The quit condition is polled between frames only. Returns the number of frames shown.
pub fn run_window<S: DotSource>(driver: &mut StereogramDriver<S>) -> SirdsResult<u64> {
    let layout = driver.layout();
    let width = layout.canvas_width() as usize;
    let height = layout.height() as usize;

    let mut window = Window::new(WINDOW_TITLE, width, height, WindowOptions::default())
        .map_err(|e| SirdsError::display(format!("open window: {e}")))?;
    let pacer = FramePacer::new(driver.config().fps);
    tracing::info!(width, height, fps = driver.config().fps.as_f64(), "window opened");

    let mut shown = 0u64;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let frame_start = Instant::now();

        let frame = driver.render_next()?;
        let buffer = frame.to_argb_u32();
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|e| SirdsError::display(format!("present frame: {e}")))?;
        shown += 1;

        pacer.wait(frame_start);
    }

    tracing::info!(frames = shown, "window closed");
    Ok(shown)
}
