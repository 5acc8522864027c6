//! Conversion between millisecond durations and frame counts.
//!
//! # Contracts
//! - **Rounding**: `to_frames` rounds to the nearest frame, with exact halves
//!   rounding up. This is the only place numeric drift can enter a timeline,
//!   so it is done in integer arithmetic and never through floats.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Frames per nominal second used when nothing else is configured.
pub const DEFAULT_FPS: u32 = 30;

const MS_PER_SECOND: u64 = 1_000;

const DEFAULT_RATE: NonZeroU32 = match NonZeroU32::new(DEFAULT_FPS) {
    Some(fps) => fps,
    None => panic!("DEFAULT_FPS must be non-zero"),
};

/// A fixed-rate frame clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameClock {
    fps: NonZeroU32,
}

impl FrameClock {
    pub const fn new(fps: NonZeroU32) -> Self {
        Self { fps }
    }

    /// Returns `None` for a zero rate.
    pub fn from_fps(fps: u32) -> Option<Self> {
        NonZeroU32::new(fps).map(Self::new)
    }

    #[inline]
    pub fn fps(self) -> u32 {
        self.fps.get()
    }

    /// Converts a millisecond duration to frames, rounding to nearest.
    ///
    /// `round(ms / 1000 * fps)` computed as `(ms * fps + 500) / 1000`.
    #[inline]
    pub fn to_frames(self, ms: u64) -> u64 {
        ms.saturating_mul(u64::from(self.fps.get()))
            .saturating_add(MS_PER_SECOND / 2)
            / MS_PER_SECOND
    }

    /// Converts a frame count back to milliseconds, rounding to nearest.
    /// Used for display only; never fed back into scheduling.
    #[inline]
    pub fn to_ms(self, frames: u64) -> u64 {
        let fps = u64::from(self.fps.get());
        frames
            .saturating_mul(MS_PER_SECOND)
            .saturating_add(fps / 2)
            / fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_RATE)
    }
}

#[cfg(test)]
#[path = "tests/clock_tests.rs"]
mod tests;
