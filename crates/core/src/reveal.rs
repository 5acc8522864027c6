//! How much of a message's text is shown while it is being typed.
//!
//! The compiler only knows a coarse `[start, typing_end)` window. Turning
//! progress through that window into visible text is a view concern, kept
//! behind [`RevealStrategy`] so it can be swapped without touching scheduling.

use serde::{Deserialize, Serialize};

/// Integer progress through a typing window.
///
/// Kept as an exact `elapsed / total` ratio so `floor(fraction * len)` never
/// suffers float rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progress {
    pub elapsed: u64,
    pub total: u64,
}

impl Progress {
    /// Clamps `elapsed` into `[0, total]`.
    pub fn new(elapsed: u64, total: u64) -> Self {
        Self {
            elapsed: elapsed.min(total),
            total,
        }
    }

    /// `true` for a zero-length window, which counts as already complete.
    pub fn is_complete(self) -> bool {
        self.elapsed >= self.total
    }

    /// `floor(elapsed / total * units)`, or `units` for a zero-length window.
    pub fn scale(self, units: usize) -> usize {
        if self.total == 0 {
            return units;
        }
        let units_wide = units as u128;
        let shown = units_wide * u128::from(self.elapsed) / u128::from(self.total);
        usize::try_from(shown).unwrap_or(units).min(units)
    }

    /// Fraction in `[0, 1]`, for display only.
    pub fn fraction(self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        (self.elapsed as f64 / self.total as f64) as f32
    }
}

/// Picks the visible prefix of `text` at a given progress.
pub trait RevealStrategy {
    fn reveal<'t>(&self, text: &'t str, progress: Progress) -> &'t str;
}

/// Reveals `floor(fraction * len)` characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharacterReveal;

impl RevealStrategy for CharacterReveal {
    fn reveal<'t>(&self, text: &'t str, progress: Progress) -> &'t str {
        let chars = progress.scale(text.chars().count());
        prefix_chars(text, chars)
    }
}

/// Reveals whole words only; a word appears once its share of the window
/// has elapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordReveal;

impl RevealStrategy for WordReveal {
    fn reveal<'t>(&self, text: &'t str, progress: Progress) -> &'t str {
        let words = progress.scale(text.split_whitespace().count());
        if words == 0 {
            return "";
        }
        let mut seen = 0usize;
        let mut in_word = false;
        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if in_word {
                    seen += 1;
                    if seen == words {
                        return &text[..idx];
                    }
                }
                in_word = false;
            } else {
                in_word = true;
            }
        }
        text
    }
}

/// The first `chars` characters of `text`, on a char boundary.
pub fn prefix_chars(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
