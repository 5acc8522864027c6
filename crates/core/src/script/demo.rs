use super::{Message, ScriptRaw};

const DEMO_LINES: &[(&str, &str, u32)] = &[
    ("Alex", "You up?", 1_000),
    ("Sam", "Yeah. What’s wrong?", 1_500),
    ("Alex", "Do you ever think about that night?", 2_000),
    ("Sam", "I try not to.", 1_200),
    ("Sam", "Why now?", 1_000),
    ("Alex", "Because it felt easy.", 1_500),
    ("Alex", "Too easy.", 800),
    ("Sam", "We both wanted it.", 1_500),
    ("Alex", "That’s what scares me.", 1_500),
    ("Sam", "…Say it.", 1_200),
    ("Alex", "If you could lie with me—", 1_800),
    ("Alex", "why wouldn’t you lie to me?", 1_800),
    ("Sam", "Alex, that’s not fair.", 1_500),
    ("Alex", "Isn’t it?", 800),
    ("Sam", "I never betrayed you.", 1_500),
    ("Alex", "You helped me betray myself.", 1_800),
    ("Sam", "I trusted you.", 1_200),
    ("Alex", "Exactly.", 800),
    ("Sam", "So what are you saying?", 1_500),
    ("Alex", "Anyone who can sin with you", 1_800),
    ("Alex", "can sin against you.", 1_500),
];

impl ScriptRaw {
    /// The stock two-party conversation used when no script is supplied.
    pub fn demo() -> Self {
        let messages = DEMO_LINES
            .iter()
            .map(|&(from, text, typing_ms)| Message::new(from, text).with_typing_ms(typing_ms))
            .collect();
        Self::new(vec!["Alex".to_string(), "Sam".to_string()], messages)
    }
}
