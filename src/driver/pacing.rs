use std::time::{Duration, Instant};

use crate::foundation::core::Fps;

/// Sleeps out the remainder of each frame's time budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramePacer {
    budget: Duration,
}

impl FramePacer {
    /// Pacer targeting `fps`.
    pub fn new(fps: Fps) -> Self {
        Self {
            budget: fps.frame_duration(),
        }
    }

    /// Wall-clock time allotted to one frame.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the budget after `elapsed`, `None` if the frame overran.
    ///
    /// A frame that uses exactly its budget is on time and has zero slack.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget.checked_sub(elapsed)
    }

    /// Sleep until the budget for a frame started at `frame_start` is spent.
    ///
    /// Returns the slack that was slept away (zero on overrun).
    pub fn wait(&self, frame_start: Instant) -> Duration {
        let elapsed = frame_start.elapsed();
        match self.remaining(elapsed) {
            Some(slack) => {
                tracing::debug!(slack_ms = slack.as_secs_f64() * 1e3, "frame slack");
                if !slack.is_zero() {
                    std::thread::sleep(slack);
                }
                slack
            }
            None => {
                tracing::warn!(
                    elapsed_ms = elapsed.as_secs_f64() * 1e3,
                    budget_ms = self.budget.as_secs_f64() * 1e3,
                    "frame overran its budget"
                );
                Duration::ZERO
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/pacing.rs"]
mod tests;
