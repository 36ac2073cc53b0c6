//! One-shot progress bar reveal.

use std::{collections::HashSet, hash::Hash};

/// Fraction of a skill element that must be visible before it animates.
pub const SKILL_THRESHOLD: f64 = 0.35;
/// Attribute carrying the target percentage.
pub const LEVEL_ATTRIBUTE: &str = "data-level";

/// Target width of a progress bar, kept as written in the markup.
///
/// The value is not validated as a number; a missing or empty attribute
/// becomes `"0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLevel(String);

impl SkillLevel {
    /// Builds a level from the raw attribute value.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if !value.is_empty() => Self(value.to_string()),
            _ => Self("0".to_string()),
        }
    }

    /// Raw level text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS width value, e.g. `85%`.
    pub fn css_width(&self) -> String {
        format!("{}%", self.0)
    }
}

/// Remembers which elements already animated.
#[derive(Debug)]
pub struct RevealTracker<K> {
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> RevealTracker<K> {
    /// Empty tracker.
    pub fn new() -> Self {
        Self {
            revealed: HashSet::new(),
        }
    }

    /// Returns `true` exactly once per key.
    pub fn reveal(&mut self, key: K) -> bool {
        self.revealed.insert(key)
    }

}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_taken_verbatim() {
        assert_eq!(SkillLevel::from_attribute(Some("85")).css_width(), "85%");
        assert_eq!(SkillLevel::from_attribute(Some("abc")).css_width(), "abc%");
    }

    #[test]
    fn missing_level_defaults_to_zero() {
        assert_eq!(SkillLevel::from_attribute(None).css_width(), "0%");
        assert_eq!(SkillLevel::from_attribute(Some("")).as_str(), "0");
    }

    #[test]
    fn reveal_fires_once_per_element() {
        let mut tracker = RevealTracker::new();
        let widths_set = [0usize, 1, 0, 0, 2, 1]
            .into_iter()
            .filter(|&idx| tracker.reveal(idx))
            .count();
        assert_eq!(widths_set, 3);
        assert!(!tracker.reveal(2));
    }
}
