mod demo;
mod raw;
mod validated;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use raw::ScriptRaw;
pub use validated::Script;

/// One line of the conversation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Message {
    /// Display name of the sender; must match a participant.
    pub from: String,
    pub text: String,
    /// Explicit typing duration. Derived from the text length when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typing_ms: Option<u32>,
    /// Pause after the message is sent. Defaults to 500 ms when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_after_ms: Option<u32>,
}

impl Message {
    pub fn new(from: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            text: text.into(),
            typing_ms: None,
            delay_after_ms: None,
        }
    }

    pub fn with_typing_ms(mut self, typing_ms: u32) -> Self {
        self.typing_ms = Some(typing_ms);
        self
    }

    pub fn with_delay_after_ms(mut self, delay_after_ms: u32) -> Self {
        self.delay_after_ms = Some(delay_after_ms);
        self
    }

    /// Length of the text in characters (Unicode scalar values).
    #[inline]
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
#[path = "tests/raw_tests.rs"]
mod tests;
