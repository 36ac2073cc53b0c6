//! Skill bars that fill once when scrolled into view.

use std::{cell::RefCell, rc::Rc};

use portfolio_shared::skills::{RevealTracker, SkillLevel, LEVEL_ATTRIBUTE, SKILL_THRESHOLD};
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserverEntry};

use crate::dom::{self, Observer};

/// Skill elements on the page.
pub const SKILL_SELECTOR: &str = ".skill";
/// Bar inside a skill element whose width animates.
pub const BAR_SELECTOR: &str = ".progress > i";

/// Sets the bar width of `skill` from its level attribute.
pub fn fill_bar(skill: &Element) {
    let level = SkillLevel::from_attribute(skill.get_attribute(LEVEL_ATTRIBUTE).as_deref());
    if let Ok(Some(bar)) = skill.query_selector(BAR_SELECTOR) {
        dom::set_style(&bar, "width", &level.css_width());
    }
}

/// Skill elements and which of them already filled.
pub struct SkillBars {
    skills: Vec<Element>,
    tracker: RevealTracker<usize>,
}

impl SkillBars {
    /// Tracks `skills`, none revealed yet.
    pub fn new(skills: Vec<Element>) -> Self {
        Self {
            skills,
            tracker: RevealTracker::new(),
        }
    }

    /// Fills the bar of `el` the first time it is reported; returns whether
    /// the width was set. Elements outside the tracked set are ignored.
    pub fn reveal(&mut self, el: &Element) -> bool {
        let Some(idx) = self.skills.iter().position(|s| s == el) else {
            return false;
        };
        if !self.tracker.reveal(idx) {
            return false;
        }
        fill_bar(el);
        true
    }
}

/// Observer over every skill element.
pub struct SkillReveal {
    _observer: Observer,
}

impl SkillReveal {
    /// Observes every element matching [`SKILL_SELECTOR`].
    pub fn mount() -> Result<Self, String> {
        let skills = dom::query_all(SKILL_SELECTOR);
        let bars = Rc::new(RefCell::new(SkillBars::new(skills.clone())));

        let observer = Observer::new(SKILL_THRESHOLD, move |entries, observer| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                bars.borrow_mut().reveal(&el);
                observer.unobserve(&el);
            }
        })?;

        for skill in &skills {
            observer.observe(skill);
        }

        Ok(Self {
            _observer: observer,
        })
    }
}
