/// Size caps enforced while validating a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptLimits {
    pub max_messages: usize,
    pub max_text_length: usize,
    pub max_participants: usize,
    pub max_name_length: usize,
}

impl Default for ScriptLimits {
    fn default() -> Self {
        Self {
            max_messages: 10_000,
            max_text_length: 4_096,
            max_participants: 32,
            max_name_length: 64,
        }
    }
}

impl ScriptLimits {
    /// No caps at all. Meant for tooling that already trusts its input.
    pub fn unbounded() -> Self {
        Self {
            max_messages: usize::MAX,
            max_text_length: usize::MAX,
            max_participants: usize::MAX,
            max_name_length: usize::MAX,
        }
    }
}
