//! Metadata a video renderer needs before it can start producing frames.

use serde::{Deserialize, Serialize};

use crate::timeline::Timeline;

/// Canvas settings for the rendered chat video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompositionSettings {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl Default for CompositionSettings {
    fn default() -> Self {
        // Portrait 9:16.
        Self {
            id: "ChatVideo".to_string(),
            width: 1080,
            height: 1920,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompositionMetadata {
    pub id: String,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
    pub duration_in_frames: u64,
}

impl CompositionMetadata {
    /// The duration always follows the timeline, so a changed script never
    /// renders with a stale length.
    pub fn for_timeline(timeline: &Timeline, settings: &CompositionSettings) -> Self {
        Self {
            id: settings.id.clone(),
            fps: timeline.fps(),
            width: settings.width,
            height: settings.height,
            duration_in_frames: timeline.total_duration_frames(),
        }
    }
}
