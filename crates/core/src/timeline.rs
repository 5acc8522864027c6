//! Timeline compiler for scripted conversations.
//!
//! Folds the per-message timing resolution over a script, accumulating a
//! single frame cursor, and produces an absolute frame schedule.
//!
//! # Contracts
//! - **Invariant**: `start_frame <= typing_end_frame <= end_frame` for every message.
//! - **Invariant**: `end_frame(i) <= start_frame(i + 1)`; typing windows never overlap.
//! - **Invariant**: compiling the same script with the same config is bit-identical.
//! - **Invariant**: `total_duration_frames >= end_frame` of the last message and `fps > 0`.
//!
//! Deserialized timelines are checked against the same invariants before
//! they are handed out, so the sampler can rely on them.
//!
//! A [`Timeline`] carries no reference back to its script. A changed script
//! compiles into a brand-new timeline; nothing is diffed or patched.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::clock::FrameClock;
use crate::config::TimelineConfig;
use crate::error::{ChatError, ChatResult};
use crate::script::{Message, Script};
use crate::timing::ReadingDelayPolicy;

/// A message placed on the frame axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedMessage {
    #[serde(flatten)]
    pub message: Message,
    /// Typing (or, for the other party, the typing indicator) begins.
    pub start_frame: u64,
    /// Text fully revealed; the message counts as sent from here on.
    pub typing_end_frame: u64,
    /// Post-send delay elapsed; the next message's clock may begin.
    pub end_frame: u64,
}

impl TimedMessage {
    #[inline]
    pub fn typing_frames(&self) -> u64 {
        self.typing_end_frame.saturating_sub(self.start_frame)
    }

    /// Whether `frame` falls inside `[start_frame, typing_end_frame)`.
    #[inline]
    pub fn is_typing_at(&self, frame: u64) -> bool {
        self.start_frame <= frame && frame < self.typing_end_frame
    }

    #[inline]
    pub fn is_sent_at(&self, frame: u64) -> bool {
        self.typing_end_frame <= frame
    }
}

/// The compiled, frame-indexed schedule of a script.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TimelineWire")]
pub struct Timeline {
    messages: Vec<TimedMessage>,
    total_duration_frames: u64,
    fps: u32,
    self_participant: String,
}

/// Serialized form of [`Timeline`], unchecked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineWire {
    messages: Vec<TimedMessage>,
    total_duration_frames: u64,
    fps: u32,
    self_participant: String,
}

impl TryFrom<TimelineWire> for Timeline {
    type Error = ChatError;

    fn try_from(wire: TimelineWire) -> ChatResult<Self> {
        check_wire(&wire).map_err(ChatError::MalformedTimeline)?;
        Ok(Self {
            messages: wire.messages,
            total_duration_frames: wire.total_duration_frames,
            fps: wire.fps,
            self_participant: wire.self_participant,
        })
    }
}

fn check_wire(wire: &TimelineWire) -> Result<(), String> {
    if wire.fps == 0 {
        return Err("fps must be greater than zero".to_string());
    }
    if wire.self_participant.is_empty() {
        return Err("selfParticipant is empty".to_string());
    }
    let mut previous_end = 0u64;
    for (index, timed) in wire.messages.iter().enumerate() {
        if timed.start_frame < previous_end {
            return Err(format!(
                "message {index} starts at frame {} before the previous message ends at frame {previous_end}",
                timed.start_frame
            ));
        }
        if timed.typing_end_frame < timed.start_frame || timed.end_frame < timed.typing_end_frame {
            return Err(format!(
                "message {index} frames are out of order (start {}, typing end {}, end {})",
                timed.start_frame, timed.typing_end_frame, timed.end_frame
            ));
        }
        previous_end = timed.end_frame;
    }
    if wire.total_duration_frames < previous_end {
        return Err(format!(
            "totalDurationFrames {} ends before the last message at frame {previous_end}",
            wire.total_duration_frames
        ));
    }
    Ok(())
}

impl Timeline {
    /// Compiles with the default configuration (30 fps, reading delay before typing).
    pub fn compile(script: &Script) -> Self {
        Self::build(script, &TimelineConfig::default(), FrameClock::default())
    }

    /// Compiles with `config`; an invalid config (zero fps) is rejected
    /// rather than replaced by defaults.
    #[instrument(skip_all, fields(messages = script.messages().len(), fps = config.fps))]
    pub fn compile_with(script: &Script, config: &TimelineConfig) -> ChatResult<Self> {
        let clock = config.clock()?;
        Ok(Self::build(script, config, clock))
    }

    fn build(script: &Script, config: &TimelineConfig, clock: FrameClock) -> Self {
        let policy = &config.timing;
        let mut cursor = 0u64;
        let mut previous: Option<&Message> = None;
        let mut messages = Vec::with_capacity(script.messages().len());

        for message in script.messages() {
            let timing = policy.resolve(message, previous);
            let start_frame = match config.reading_delay_policy {
                ReadingDelayPolicy::BeforeTyping => {
                    cursor.saturating_add(clock.to_frames(timing.reading_delay_ms))
                }
                ReadingDelayPolicy::FoldedIntoBoundary => cursor,
            };
            let typing_end_frame = start_frame.saturating_add(clock.to_frames(timing.typing_ms));
            let end_frame =
                typing_end_frame.saturating_add(clock.to_frames(timing.delay_after_ms));
            cursor = end_frame;

            messages.push(TimedMessage {
                message: message.clone(),
                start_frame,
                typing_end_frame,
                end_frame,
            });
            previous = Some(message);
        }

        let total_duration_frames =
            cursor.saturating_add(clock.to_frames(u64::from(policy.trailing_buffer_ms)));
        debug!(total_duration_frames, "timeline compiled");

        Self {
            messages,
            total_duration_frames,
            fps: clock.fps(),
            self_participant: script.self_participant().to_string(),
        }
    }

    pub fn messages(&self) -> &[TimedMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Last message's `end_frame` plus the trailing buffer.
    pub fn total_duration_frames(&self) -> u64 {
        self.total_duration_frames
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn self_participant(&self) -> &str {
        &self.self_participant
    }

    pub fn is_self(&self, message: &TimedMessage) -> bool {
        message.message.from == self.self_participant
    }

    /// Every frame a render driver has to produce, `[0, total_duration_frames)`.
    pub fn frames(&self) -> Range<u64> {
        0..self.total_duration_frames
    }

    /// Total duration in milliseconds, for display.
    pub fn duration_ms(&self) -> u64 {
        FrameClock::from_fps(self.fps)
            .unwrap_or_default()
            .to_ms(self.total_duration_frames)
    }

    /// Serializes the timeline for a renderer running out of process.
    pub fn to_json(&self) -> ChatResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChatError::Serialization {
            message: e.to_string(),
            src: String::new(),
            span: (0, 0).into(),
        })
    }

    /// Parses a timeline written by [`Timeline::to_json`], rejecting frame
    /// data that breaks the ordering invariants.
    pub fn from_json(input: &str) -> ChatResult<Self> {
        let wire: TimelineWire =
            serde_json::from_str(input).map_err(|err| ChatError::from_json(input, &err))?;
        Self::try_from(wire).inspect_err(|err| warn!(%err, "timeline rejected"))
    }
}

/// Compiles `script` with the default configuration.
pub fn compile(script: &Script) -> Timeline {
    Timeline::compile(script)
}

#[cfg(test)]
#[path = "tests/timeline_tests.rs"]
mod tests;
