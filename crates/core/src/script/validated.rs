use serde::Serialize;

use crate::error::ChatResult;

use super::{Message, ScriptRaw};

/// A script that passed validation.
///
/// Every sender is a declared participant, participant names are unique, and
/// the self participant is explicit. Only [`ScriptRaw::validate`] builds one,
/// so the compiler never has to re-check these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    participants: Vec<String>,
    self_participant: String,
    messages: Vec<Message>,
}

impl Script {
    pub(super) fn from_parts(
        participants: Vec<String>,
        self_participant: String,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            participants,
            self_participant,
            messages,
        }
    }

    /// Validates `participants` and `messages` with the first participant as self.
    pub fn new(participants: Vec<String>, messages: Vec<Message>) -> ChatResult<Self> {
        ScriptRaw::new(participants, messages).validate()
    }

    /// Parses and validates a JSON script in one step.
    pub fn from_json(input: &str) -> ChatResult<Self> {
        ScriptRaw::from_json(input)?.validate()
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn self_participant(&self) -> &str {
        &self.self_participant
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_self(&self, name: &str) -> bool {
        self.self_participant == name
    }

    /// Everyone except the self participant, in declaration order.
    pub fn others(&self) -> impl Iterator<Item = &str> {
        self.participants
            .iter()
            .map(String::as_str)
            .filter(move |name| *name != self.self_participant)
    }

    pub fn into_raw(self) -> ScriptRaw {
        ScriptRaw {
            participants: self.participants,
            self_participant: Some(self.self_participant),
            messages: self.messages,
        }
    }
}
