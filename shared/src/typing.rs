//! Type-then-delete animation driven one step at a time.
//!
//! The host schedules each [`Typewriter::step`] after the delay returned by
//! the previous one, so forward typing, deleting and the pause at the end of
//! a phrase can all run at different speeds.

/// Phrases shown in the hero section, in display order.
pub const DEFAULT_PHRASES: [&str; 4] = [
    "Frontend Developer",
    "UI & Interaction Designer",
    "Performance Enthusiast",
    "Accessibility Advocate",
];

/// Delay before the very first step.
pub const INITIAL_DELAY_MS: u32 = 600;
/// Delay after revealing a character.
pub const TYPE_DELAY_MS: u32 = 90;
/// Delay after removing a character.
pub const DELETE_DELAY_MS: u32 = 30;
/// Pause once a phrase is fully shown.
pub const HOLD_DELAY_MS: u32 = 1100;

/// Direction of the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing characters left to right.
    Typing,
    /// Removing characters right to left.
    Deleting,
}

/// Output of one step: what to display and when to step again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Text the placeholder should show.
    pub text: String,
    /// Milliseconds until the next step.
    pub next_delay_ms: u32,
}

/// Finite-state machine over `(phrase, char, phase)`.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` when there is nothing to type.
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> =
            phrases.into_iter().map(|p| p.as_ref().chars().collect()).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        })
    }

    /// Index of the phrase currently being typed or deleted.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advances by one character and reports the frame to render.
    pub fn step(&mut self) -> Frame {
        let len = self.phrases[self.phrase_index].len();
        match self.phase {
            Phase::Typing => {
                self.char_index += 1;
                let text = self.visible_text();
                if self.char_index >= len {
                    self.phase = Phase::Deleting;
                    return Frame {
                        text,
                        next_delay_ms: HOLD_DELAY_MS,
                    };
                }
                Frame {
                    text,
                    next_delay_ms: TYPE_DELAY_MS,
                }
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                let text = self.visible_text();
                if self.char_index == 0 {
                    self.phase = Phase::Typing;
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    if self.phrase_index == 0 {
                        tracing::debug!("typewriter wrapped to first phrase");
                    }
                    return Frame {
                        text,
                        next_delay_ms: TYPE_DELAY_MS,
                    };
                }
                Frame {
                    text,
                    next_delay_ms: DELETE_DELAY_MS,
                }
            }
        }
    }

    fn visible_text(&self) -> String {
        let phrase = &self.phrases[self.phrase_index];
        phrase[..self.char_index.min(phrase.len())].iter().collect()
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| p.chars().collect()).collect(),
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        }
    }
}
