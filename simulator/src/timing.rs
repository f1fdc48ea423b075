//! Frame pacing for the simulator.
//!
//! Uses `std::time`, so it lives here rather than in the common crate. The
//! pacer sleeps off whatever is left of the frame budget after presenting,
//! the same way the dashboard main loop did.

use std::thread;
use std::time::{Duration, Instant};

/// Frame budget for `fps` ticks per second. Zero is treated as one.
pub fn frame_time(fps: u32) -> Duration { Duration::from_secs(1) / fps.max(1) }

#[derive(Debug)]
pub struct FramePacer {
    frame_time: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: frame_time(fps),
            frame_start: Instant::now(),
        }
    }

    pub fn set_fps(
        &mut self,
        fps: u32,
    ) {
        self.frame_time = frame_time(fps);
    }

    #[inline]
    pub const fn frame_time(&self) -> Duration { self.frame_time }

    /// Sleep until the current frame's budget is used up, then start the next frame.
    ///
    /// Returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.frame_start.elapsed();
        let remaining = self.frame_time.saturating_sub(elapsed);
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
        remaining
    }
}
