//! Stateless frame queries over a compiled [`Timeline`].
//!
//! `sample(timeline, frame)` answers what is on screen at `frame`: which
//! messages have been sent and which one, if any, is being typed. Every
//! integer is a valid query; results saturate before the first message and
//! after the last one.
//!
//! Because windows never overlap, sent messages always form a prefix of the
//! timeline, so a query is a binary search and borrows instead of allocating.

use serde::Serialize;

use crate::reveal::{CharacterReveal, Progress, RevealStrategy};
use crate::timeline::{TimedMessage, Timeline};

/// What is being shown for the message currently in its typing window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reveal<'a> {
    /// The self participant is typing; `text` is what the composer shows.
    Partial { text: &'a str, progress: Progress },
    /// The other party is typing; only a generic indicator is shown.
    Indicator,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TypingState<'a> {
    /// Position of the message in script order.
    pub index: usize,
    pub message: &'a TimedMessage,
    pub reveal: Reveal<'a>,
}

impl<'a> TypingState<'a> {
    pub fn revealed_text(&self) -> Option<&'a str> {
        match self.reveal {
            Reveal::Partial { text, .. } => Some(text),
            Reveal::Indicator => None,
        }
    }

    pub fn is_self(&self) -> bool {
        matches!(self.reveal, Reveal::Partial { .. })
    }
}

/// Header status of the conversation partner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerStatus {
    Online,
    Typing,
}

/// Changes exactly when a chat view should scroll to the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ScrollState {
    pub visible_messages: usize,
    pub composer_chars: usize,
}

/// Result of sampling a timeline at one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SampleResult<'a> {
    pub frame: i64,
    /// Messages whose `typing_end_frame <= frame`, in script order.
    pub visible: &'a [TimedMessage],
    pub typing: Option<TypingState<'a>>,
}

impl<'a> SampleResult<'a> {
    pub fn peer_status(&self) -> PeerStatus {
        match &self.typing {
            Some(state) if !state.is_self() => PeerStatus::Typing,
            _ => PeerStatus::Online,
        }
    }

    /// Text in the self participant's input box; empty unless they are typing.
    pub fn composer_text(&self) -> &'a str {
        self.typing
            .and_then(|state| state.revealed_text())
            .unwrap_or("")
    }

    /// Whether the send button shows as armed.
    pub fn send_armed(&self) -> bool {
        !self.composer_text().is_empty()
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            visible_messages: self.visible.len(),
            composer_chars: self.composer_text().chars().count(),
        }
    }

    /// No message is visible and nobody is typing.
    pub fn is_idle_start(&self) -> bool {
        self.visible.is_empty() && self.typing.is_none()
    }
}

/// Samples `timeline` at `frame` with character-by-character reveal.
pub fn sample(timeline: &Timeline, frame: i64) -> SampleResult<'_> {
    sample_with(timeline, frame, &CharacterReveal)
}

/// Samples `timeline` at `frame`, revealing self-typed text with `strategy`.
pub fn sample_with<'a, R>(timeline: &'a Timeline, frame: i64, strategy: &R) -> SampleResult<'a>
where
    R: RevealStrategy + ?Sized,
{
    let messages = timeline.messages();
    let Ok(at) = u64::try_from(frame) else {
        return SampleResult {
            frame,
            visible: &messages[..0],
            typing: None,
        };
    };

    let sent = messages.partition_point(|m| m.is_sent_at(at));
    let typing = messages
        .get(sent)
        .filter(|m| m.is_typing_at(at))
        .map(|message| TypingState {
            index: sent,
            message,
            reveal: reveal_for(timeline, message, at, strategy),
        });

    SampleResult {
        frame,
        visible: &messages[..sent],
        typing,
    }
}

fn reveal_for<'a, R>(
    timeline: &Timeline,
    message: &'a TimedMessage,
    at: u64,
    strategy: &R,
) -> Reveal<'a>
where
    R: RevealStrategy + ?Sized,
{
    if !timeline.is_self(message) {
        return Reveal::Indicator;
    }
    let progress = Progress::new(
        at.saturating_sub(message.start_frame),
        message.typing_frames(),
    );
    Reveal::Partial {
        text: strategy.reveal(&message.message.text, progress),
        progress,
    }
}

impl Timeline {
    /// Shorthand for [`sample`].
    pub fn sample(&self, frame: i64) -> SampleResult<'_> {
        sample(self, frame)
    }
}

#[cfg(test)]
#[path = "tests/sampler_tests.rs"]
mod tests;
