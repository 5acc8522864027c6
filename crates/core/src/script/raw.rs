use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChatError, ChatResult};
use crate::resource::ScriptLimits;
use crate::version::SCRIPT_SCHEMA_VERSION;

use super::validated::Script;
use super::Message;

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ScriptEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    script_schema_version: Option<String>,
    participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    self_participant: Option<String>,
    #[serde(default)]
    messages: Vec<Message>,
}

/// JSON-facing script, exactly as a caller wrote it. Nothing is checked yet;
/// [`ScriptRaw::validate`] turns it into a [`Script`] the compiler accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct ScriptRaw {
    pub participants: Vec<String>,
    /// The party whose typing is revealed character by character.
    /// Defaults to the first participant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_participant: Option<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl ScriptRaw {
    pub fn new(participants: Vec<String>, messages: Vec<Message>) -> Self {
        Self {
            participants,
            self_participant: None,
            messages,
        }
    }

    /// Parses a JSON script. Scripts without `scriptSchemaVersion` are
    /// accepted as legacy input.
    pub fn from_json(input: &str) -> ChatResult<Self> {
        let envelope: ScriptEnvelope =
            serde_json::from_str(input).map_err(|err| ChatError::from_json(input, &err))?;
        match envelope.script_schema_version.as_deref() {
            Some(version) if version != SCRIPT_SCHEMA_VERSION => {
                Err(ChatError::MalformedScript(format!(
                    "schema incompatible: found {version}, expected {SCRIPT_SCHEMA_VERSION}"
                )))
            }
            _ => Ok(Self {
                participants: envelope.participants,
                self_participant: envelope.self_participant,
                messages: envelope.messages,
            }),
        }
    }

    /// Serializes the script to a JSON string with the current schema version.
    pub fn to_json(&self) -> ChatResult<String> {
        let envelope = ScriptEnvelope {
            script_schema_version: Some(SCRIPT_SCHEMA_VERSION.to_string()),
            participants: self.participants.clone(),
            self_participant: self.self_participant.clone(),
            messages: self.messages.clone(),
        };
        serde_json::to_string_pretty(&envelope).map_err(|e| ChatError::Serialization {
            message: e.to_string(),
            src: String::new(),
            span: (0, 0).into(),
        })
    }

    /// JSON Schema describing the accepted script document.
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ScriptEnvelope)
    }

    /// Validates against the default [`ScriptLimits`].
    pub fn validate(self) -> ChatResult<Script> {
        self.validate_with_limits(ScriptLimits::default())
    }

    pub fn validate_with_limits(self, limits: ScriptLimits) -> ChatResult<Script> {
        if let Err(err) = self.check(limits) {
            warn!(error = %err, "script rejected");
            return Err(err);
        }
        let self_participant = match self.self_participant {
            Some(name) => name,
            None => self.participants[0].clone(),
        };
        Ok(Script::from_parts(
            self.participants,
            self_participant,
            self.messages,
        ))
    }

    fn check(&self, limits: ScriptLimits) -> ChatResult<()> {
        if self.participants.len() < 2 {
            return Err(ChatError::MalformedScript(format!(
                "at least 2 participants required, found {}",
                self.participants.len()
            )));
        }
        if self.participants.len() > limits.max_participants {
            return Err(ChatError::ResourceLimit(format!(
                "participant count {} exceeds {}",
                self.participants.len(),
                limits.max_participants
            )));
        }

        let mut seen = BTreeSet::new();
        for name in &self.participants {
            if name.is_empty() {
                return Err(ChatError::MalformedScript(
                    "participant names must be non-empty".to_string(),
                ));
            }
            if name.chars().count() > limits.max_name_length {
                return Err(ChatError::ResourceLimit(format!(
                    "participant name '{name}' exceeds {} characters",
                    limits.max_name_length
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(ChatError::MalformedScript(format!(
                    "duplicate participant '{name}'"
                )));
            }
        }

        if let Some(me) = &self.self_participant {
            if !seen.contains(me.as_str()) {
                return Err(ChatError::MalformedScript(format!(
                    "self participant '{me}' is not a declared participant"
                )));
            }
        }

        if self.messages.len() > limits.max_messages {
            return Err(ChatError::ResourceLimit(format!(
                "message count {} exceeds {}",
                self.messages.len(),
                limits.max_messages
            )));
        }
        for (index, message) in self.messages.iter().enumerate() {
            if !seen.contains(message.from.as_str()) {
                return Err(ChatError::MalformedScript(format!(
                    "message {index}: sender '{}' is not a declared participant",
                    message.from
                )));
            }
            if message.text.is_empty() {
                return Err(ChatError::MalformedScript(format!(
                    "message {index}: text must be non-empty"
                )));
            }
            if message.text_len() > limits.max_text_length {
                return Err(ChatError::ResourceLimit(format!(
                    "message {index}: text exceeds {} characters",
                    limits.max_text_length
                )));
            }
        }
        Ok(())
    }
}
