#![allow(dead_code)]

use chat_timeline::{Message, Script, ScriptRaw};

pub fn alex_sam(messages: Vec<Message>) -> Script {
    ScriptRaw::new(vec!["Alex".to_string(), "Sam".to_string()], messages)
        .validate()
        .expect("valid script")
}

/// xorshift64* stream, so generated scripts are the same on every run.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// A script mixing explicit and derived timings, zero durations included.
pub fn generated_script(seed: u64, message_count: usize) -> Script {
    let mut rng = XorShift::new(seed);
    let messages = (0..message_count)
        .map(|_| {
            let from = if rng.below(2) == 0 { "Alex" } else { "Sam" };
            let len = 1 + rng.below(120) as usize;
            let mut message = Message::new(from, "w".repeat(len));
            if rng.below(3) == 0 {
                message = message.with_typing_ms(rng.below(4_000) as u32);
            }
            if rng.below(3) == 0 {
                message = message.with_delay_after_ms(rng.below(2_000) as u32);
            }
            message
        })
        .collect();
    alex_sam(messages)
}
