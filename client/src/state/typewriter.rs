//! Rotating typewriter headline for the hero banner.
//!
//! The machine is driven externally: each call to [`Typewriter::tick`]
//! performs one step and returns how long the caller should wait before the
//! next one. `text` is always a prefix of the current title and changes by at
//! most one character per tick.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::time::Duration;

pub const HERO_TITLES: &[&str] = &[
    "Software Head",
    "Tech Leader",
    "Full Stack Developer",
    "System Architect",
    "Innovation Driver",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub dwell: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(150),
            delete_delay: Duration::from_millis(75),
            dwell: Duration::from_millis(1500),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    titles: Vec<String>,
    timing: TypingTiming,
    text: String,
    phase: Phase,
    title_index: usize,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(titles: &[S], timing: TypingTiming) -> Self {
        Self {
            titles: titles.iter().map(|t| t.as_ref().to_owned()).collect(),
            timing,
            text: String::new(),
            phase: Phase::Typing,
            title_index: 0,
        }
    }

    pub fn hero() -> Self {
        Self::new(HERO_TITLES, TypingTiming::default())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn title_index(&self) -> usize {
        self.title_index
    }

    pub fn current_title(&self) -> &str {
        self.titles.get(self.title_index).map_or("", String::as_str)
    }

    /// Delay before the first tick.
    pub fn initial_delay(&self) -> Duration {
        self.timing.type_delay
    }

    /// Advance one step; returns the delay until the next tick.
    pub fn tick(&mut self) -> Duration {
        if self.titles.is_empty() {
            return self.timing.dwell;
        }
        match self.phase {
            Phase::Typing => {
                let target = &self.titles[self.title_index];
                let typed = self.text.chars().count();
                match target.chars().nth(typed) {
                    Some(next) => {
                        self.text.push(next);
                        if self.text.len() == target.len() {
                            self.timing.dwell
                        } else {
                            self.timing.type_delay
                        }
                    }
                    None => {
                        // Dwell has elapsed on the full word.
                        self.phase = Phase::Deleting;
                        self.timing.delete_delay
                    }
                }
            }
            Phase::Deleting => {
                self.text.pop();
                if self.text.is_empty() {
                    self.title_index = (self.title_index + 1) % self.titles.len();
                    self.phase = Phase::Typing;
                    self.timing.type_delay
                } else {
                    self.timing.delete_delay
                }
            }
        }
    }
}
