//! Typewriter headline effect.
//!
//! Types a phrase one character at a time, holds it, erases it, and moves on
//! to the next phrase. Driven by timestamps so the DOM layer can feed it from
//! `requestAnimationFrame` or a timer.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub type_ms: f64,
    pub delete_ms: f64,
    /// How long a fully typed phrase stays up.
    pub hold_ms: f64,
    /// Blank pause before the next phrase starts.
    pub gap_ms: f64,
    /// Keep cycling. When false the last phrase stays once typed.
    pub repeat: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_ms: 80.0,
            delete_ms: 40.0,
            hold_ms: 1_800.0,
            gap_ms: 400.0,
            repeat: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Typing,
    Holding,
    Deleting,
    Gap,
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    config: TypewriterConfig,
    phrase: usize,
    shown: usize,
    stage: Stage,
    next_at: Option<f64>,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|phrase| phrase.as_ref().chars().collect())
            .filter(|chars: &Vec<char>| !chars.is_empty())
            .collect();
        let stage = if phrases.is_empty() {
            Stage::Done
        } else {
            Stage::Typing
        };
        Self {
            phrases,
            config,
            phrase: 0,
            shown: 0,
            stage,
            next_at: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Currently visible text.
    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase)
            .map(|chars| chars[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Advances to `now_ms`. Returns the new text if it changed.
    pub fn tick(&mut self, now_ms: f64) -> Option<String> {
        if self.is_done() {
            return None;
        }
        let before = (self.phrase, self.shown);
        let mut next_at = *self.next_at.get_or_insert(now_ms);

        // A late frame catches up on every step it missed. Delays are at
        // least 1ms so a zeroed config cannot spin.
        while !self.is_done() && now_ms >= next_at {
            next_at += self.step().max(1.0);
        }
        self.next_at = Some(next_at);

        ((self.phrase, self.shown) != before).then(|| self.text())
    }

    /// Performs one step and returns the delay before the next.
    fn step(&mut self) -> f64 {
        let length = self.phrases[self.phrase].len();
        match self.stage {
            Stage::Typing => {
                self.shown += 1;
                if self.shown >= length {
                    let last = self.phrase + 1 == self.phrases.len();
                    if last && !self.config.repeat {
                        self.stage = Stage::Done;
                        return 0.0;
                    }
                    self.stage = Stage::Holding;
                    return self.config.hold_ms;
                }
                self.config.type_ms
            }
            Stage::Holding => {
                self.stage = Stage::Deleting;
                self.step()
            }
            Stage::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.stage = Stage::Gap;
                    return self.config.gap_ms;
                }
                self.config.delete_ms
            }
            Stage::Gap => {
                self.phrase = (self.phrase + 1) % self.phrases.len();
                self.stage = Stage::Typing;
                self.step()
            }
            Stage::Done => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick() -> TypewriterConfig {
        TypewriterConfig {
            type_ms: 10.0,
            delete_ms: 5.0,
            hold_ms: 100.0,
            gap_ms: 50.0,
            repeat: true,
        }
    }

    #[test]
    fn types_one_character_per_step() {
        let mut writer = Typewriter::new(["Vjenčanja", "Proslave"], quick());
        assert_eq!(writer.tick(0.0).as_deref(), Some("V"));
        assert_eq!(writer.tick(5.0), None);
        assert_eq!(writer.tick(10.0).as_deref(), Some("Vj"));
        assert_eq!(writer.tick(30.0).as_deref(), Some("Vjen"));
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut writer = Typewriter::new(["čćž"], quick());
        writer.tick(0.0);
        assert_eq!(writer.tick(10.0).as_deref(), Some("čć"));
    }

    #[test]
    fn cycles_through_phrases() {
        let mut writer = Typewriter::new(["ab", "cd"], quick());
        writer.tick(0.0); // "a"
        writer.tick(10.0); // "ab", hold until 110
        assert_eq!(writer.tick(109.0), None);
        assert_eq!(writer.tick(110.0).as_deref(), Some("a"));
        assert_eq!(writer.tick(115.0).as_deref(), Some(""));
        // gap until 165, then the next phrase starts
        assert_eq!(writer.tick(164.0), None);
        assert_eq!(writer.phrase_index(), 0);
        assert_eq!(writer.tick(165.0).as_deref(), Some("c"));
        assert_eq!(writer.phrase_index(), 1);
        assert_eq!(writer.tick(175.0).as_deref(), Some("cd"));
    }

    #[test]
    fn stops_on_last_phrase_without_repeat() {
        let config = TypewriterConfig {
            repeat: false,
            ..quick()
        };
        let mut writer = Typewriter::new(["hi"], config);
        writer.tick(0.0);
        assert_eq!(writer.tick(1_000.0).as_deref(), Some("hi"));
        assert!(writer.is_done());
        assert_eq!(writer.tick(5_000.0), None);
    }

    #[test]
    fn no_phrases_is_done() {
        let mut writer = Typewriter::new(Vec::<String>::new(), quick());
        assert!(writer.is_done());
        assert_eq!(writer.tick(0.0), None);
        assert_eq!(writer.text(), "");
    }
}
