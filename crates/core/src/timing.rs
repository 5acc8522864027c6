//! Per-message timing resolution.
//!
//! Given a message and its script-order predecessor, derives the three
//! millisecond durations the compiler lays out on the frame axis: reading
//! delay, typing duration and post-send delay. Everything here is a pure
//! function of the message pair and the policy constants.

use serde::{Deserialize, Serialize};

use crate::script::Message;

/// Where the reading delay of a message lands on the timeline.
///
/// Two variants of the pacing rule exist. Only one is applied per compile,
/// selected by [`crate::TimelineConfig::reading_delay_policy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingDelayPolicy {
    /// The reading delay is inserted before the message's typing window,
    /// leaving a gap after the previous message's post-send delay.
    #[default]
    BeforeTyping,
    /// The reading delay is folded into the boundary: a message starts the
    /// instant its predecessor's post-send delay ends.
    FoldedIntoBoundary,
}

/// The pacing policy applied by the crate unless configured otherwise.
pub const DEFAULT_READING_DELAY_POLICY: ReadingDelayPolicy = ReadingDelayPolicy::BeforeTyping;

/// Millisecond constants driving the default pacing model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingPolicy {
    /// Minimum pause before a non-first message begins.
    pub reading_floor_ms: u32,
    /// Reading pause per character of the previous message.
    pub reading_ms_per_char: u32,
    /// Minimum typing phase when `typingMs` is not supplied.
    pub typing_floor_ms: u32,
    /// Typing time per character when `typingMs` is not supplied.
    pub typing_ms_per_char: u32,
    /// Post-send delay when `delayAfterMs` is not supplied.
    pub default_delay_after_ms: u32,
    /// Buffer appended after the last message's end.
    pub trailing_buffer_ms: u32,
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self {
            reading_floor_ms: 800,
            reading_ms_per_char: 50,
            typing_floor_ms: 1_000,
            typing_ms_per_char: 50,
            default_delay_after_ms: 500,
            trailing_buffer_ms: 2_000,
        }
    }
}

/// Raw millisecond durations for one message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTiming {
    pub reading_delay_ms: u64,
    pub typing_ms: u64,
    pub delay_after_ms: u64,
}

impl TimingPolicy {
    /// Resolves the durations for `message`, given its predecessor in script
    /// order (`None` for the first message).
    ///
    /// The reading delay depends only on `previous`; who sent it is irrelevant.
    pub fn resolve(&self, message: &Message, previous: Option<&Message>) -> ResolvedTiming {
        ResolvedTiming {
            reading_delay_ms: previous.map_or(0, |prev| self.reading_delay_ms(prev)),
            typing_ms: self.typing_ms(message),
            delay_after_ms: self.delay_after_ms(message),
        }
    }

    /// `max(floor, len(previous.text) * per_char)`.
    pub fn reading_delay_ms(&self, previous: &Message) -> u64 {
        scaled_with_floor(
            previous.text_len(),
            self.reading_ms_per_char,
            self.reading_floor_ms,
        )
    }

    /// Explicit `typingMs`, else `max(floor, len(text) * per_char)`.
    /// An explicit zero is honoured and yields a zero-length typing window.
    pub fn typing_ms(&self, message: &Message) -> u64 {
        match message.typing_ms {
            Some(ms) => u64::from(ms),
            None => scaled_with_floor(
                message.text_len(),
                self.typing_ms_per_char,
                self.typing_floor_ms,
            ),
        }
    }

    pub fn delay_after_ms(&self, message: &Message) -> u64 {
        u64::from(
            message
                .delay_after_ms
                .unwrap_or(self.default_delay_after_ms),
        )
    }
}

fn scaled_with_floor(len: usize, per_char: u32, floor: u32) -> u64 {
    let len = u64::try_from(len).unwrap_or(u64::MAX);
    len.saturating_mul(u64::from(per_char))
        .max(u64::from(floor))
}

#[cfg(test)]
#[path = "tests/timing_tests.rs"]
mod tests;
