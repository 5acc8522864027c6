//! Observable frame digests for deterministic testing.
//!
//! These types capture what a viewer would see at a frame, excluding
//! timing internals, so golden traces stay readable and stable.

use serde::{Deserialize, Serialize};

use crate::sampler::{PeerStatus, SampleResult};
use crate::timeline::Timeline;

/// A single frame in the trace where the view changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTraceStep {
    pub frame: u64,
    pub view: FrameView,
}

/// What the viewer sees at a given frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameView {
    /// Number of sent messages on screen.
    pub visible: usize,
    /// Sender and text of the newest sent message.
    pub last: Option<String>,
    pub typing: Option<TypingDigest>,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingDigest {
    pub from: String,
    /// Composer contents; `None` for the other party's indicator.
    pub composer: Option<String>,
}

impl FrameView {
    pub fn from_sample(sample: &SampleResult<'_>) -> Self {
        Self {
            visible: sample.visible.len(),
            last: sample
                .visible
                .last()
                .map(|m| format!("{}: {}", m.message.from, m.message.text)),
            typing: sample.typing.map(|state| TypingDigest {
                from: state.message.message.from.clone(),
                composer: state.revealed_text().map(str::to_string),
            }),
            status: match sample.peer_status() {
                PeerStatus::Online => "Online".to_string(),
                PeerStatus::Typing => "Typing...".to_string(),
            },
        }
    }
}

/// A complete trace of view changes across a timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTrace {
    pub steps: Vec<FrameTraceStep>,
}

impl FrameTrace {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn push(&mut self, frame: u64, view: FrameView) {
        self.steps.push(FrameTraceStep { frame, view });
    }

    /// Samples every frame in `[0, total_duration_frames)` and keeps only the
    /// frames where the view differs from the one before.
    pub fn transitions(timeline: &Timeline) -> Self {
        let mut trace = Self::new();
        let mut previous: Option<FrameView> = None;
        for frame in timeline.frames() {
            let Ok(query) = i64::try_from(frame) else {
                break;
            };
            let view = FrameView::from_sample(&timeline.sample(query));
            if previous.as_ref() != Some(&view) {
                previous = Some(view.clone());
                trace.push(frame, view);
            }
        }
        trace
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
