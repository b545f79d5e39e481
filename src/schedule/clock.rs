use std::time::Duration;

use crate::foundation::core::{Fps, FrameIndex};

/// Fixed-rate timestamp source for hosts without a display clock (the CLI, tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    pub fps: Fps,
}

impl FrameClock {
    pub fn new(fps: Fps) -> Self {
        Self { fps }
    }

    /// Timestamp of frame `idx`: `idx * frame_duration`.
    pub fn timestamp(self, idx: FrameIndex) -> Duration {
        Duration::from_secs_f64(self.fps.frames_to_secs(idx.0))
    }

    /// Timestamps for frames `0..count`.
    pub fn timestamps(self, count: u64) -> impl Iterator<Item = (FrameIndex, Duration)> {
        (0..count).map(move |i| (FrameIndex(i), self.timestamp(FrameIndex(i))))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/clock.rs"]
mod tests;
